//! ToxiScan Service
//!
//! Core logic for additive resolution, aggregation, and classification.

pub mod aggregator;
pub mod classifier;
pub mod normalizer;
pub mod taxonomy;

pub use aggregator::{AnalysisError, AnalysisService};
pub use normalizer::{normalize, strip_code_prefix};
pub use taxonomy::TaxonomyIndex;
