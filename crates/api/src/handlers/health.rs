use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use toxiscan_types::ProbeReport;

use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
	pub status: String,
	pub taxonomy_entries: usize,
	pub providers: Vec<ProbeReport>,
}

/// GET /ready - Readiness probe with per-provider reachability checks
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let providers = state.analysis_service.probe_all().await;
	let all_reachable = providers.iter().all(|probe| probe.reachable);

	let status = if all_reachable { "ready" } else { "degraded" };
	let body = ReadinessResponse {
		status: status.to_string(),
		taxonomy_entries: state.taxonomy.len(),
		providers,
	};
	let code = if all_reachable {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};
	(code, Json(body))
}
