//! Error types for provider operations

use thiserror::Error;

/// Faults raised at the adapter boundary.
///
/// Provider absence is not an error; see `ProviderOutcome::Absent`.
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("http request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("invalid endpoint: {reason}")]
	Endpoint { reason: String },
}

pub type ProviderResult<T> = Result<T, ProviderError>;
