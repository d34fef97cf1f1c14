use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::{error, info};

use toxiscan_types::AnalysisReport;

use crate::handlers::common::ErrorDetail;
use crate::state::AppState;

/// GET /api/analyze/{query} - Resolve one additive query into a
/// consolidated safety profile.
///
/// Unexpected faults are caught here, logged with full detail, and
/// surfaced as a generic 500 body; a degraded-but-complete report is
/// never mistaken for an error.
pub async fn analyze(
	State(state): State<AppState>,
	Path(query): Path<String>,
) -> Result<Json<AnalysisReport>, (StatusCode, Json<ErrorDetail>)> {
	info!(%query, "received analyze request");

	match state.analysis_service.analyze(&query).await {
		Ok(report) => Ok(Json(report)),
		Err(err) => {
			error!(%query, error = %err, "analysis failed");
			Err((
				StatusCode::INTERNAL_SERVER_ERROR,
				Json(ErrorDetail::new(err.to_string())),
			))
		},
	}
}
