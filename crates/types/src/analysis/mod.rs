//! Analysis domain models
//!
//! Types flowing through the resolution pipeline: the normalized query
//! identity, the merged canonical record, and the final report returned to
//! API callers.

pub mod query;
pub mod record;
pub mod report;

pub use query::QueryIdentifier;
pub use record::{CanonicalRecord, DESCRIPTION_UNAVAILABLE};
pub use report::{
	title_case, AnalysisReport, OriginCategory, RelatedProduct, ReportIdentity, RiskBadge,
	RiskLevel,
};
