use std::sync::Arc;

use toxiscan_service::{AnalysisService, TaxonomyIndex};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub analysis_service: Arc<AnalysisService>,
	pub taxonomy: Arc<TaxonomyIndex>,
}
