//! Merged canonical record

use crate::analysis::{QueryIdentifier, RiskLevel};

/// Placeholder used when no provider supplied a description.
pub const DESCRIPTION_UNAVAILABLE: &str = "Description unavailable.";

/// The merged view of all provider results for one request.
///
/// Built by the orchestrator under fixed precedence: the registry-provided
/// display name overrides the normalized name, and the encyclopedia summary
/// is the sole description source. Lives only for the duration of a request.
#[derive(Debug, Clone)]
pub struct CanonicalRecord {
	pub identity: QueryIdentifier,
	pub description: String,
	pub structured_risk: Option<RiskLevel>,
	/// Labels of the providers that contributed data, in merge order.
	pub sources: Vec<String>,
}

impl CanonicalRecord {
	pub fn has_description(&self) -> bool {
		self.description != DESCRIPTION_UNAVAILABLE
	}
}
