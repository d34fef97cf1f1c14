use serde::Serialize;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
	pub detail: String,
}

impl ErrorDetail {
	pub fn new(detail: impl Into<String>) -> Self {
		Self {
			detail: detail.into(),
		}
	}
}
