use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Level;

use crate::handlers::{analyze, autocomplete, health, ready};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
	let cors = CorsLayer::permissive();
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);

	Router::new()
		.route("/health", get(health))
		.route("/ready", get(ready))
		.route("/api/analyze/{query}", get(analyze))
		.route("/api/autocomplete", get(autocomplete))
		.layer(cors)
		.layer(trace)
}
