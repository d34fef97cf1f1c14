use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use crate::state::AppState;

/// At most this many suggestions per response.
const SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct AutocompleteParams {
	#[serde(default)]
	q: String,
}

/// GET /api/autocomplete?q= - Case-insensitive substring suggestions from
/// the taxonomy index.
pub async fn autocomplete(
	State(state): State<AppState>,
	Query(params): Query<AutocompleteParams>,
) -> Json<Vec<String>> {
	Json(state.taxonomy.search(&params.q, SUGGESTION_LIMIT))
}
