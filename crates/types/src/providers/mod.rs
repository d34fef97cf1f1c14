//! Provider-facing types
//!
//! Outcome and error types shared by all adapters, the response models
//! parsed at each adapter boundary, and the traits the orchestrator
//! consumes providers through.

pub mod errors;
pub mod models;
pub mod outcome;
pub mod traits;

pub use errors::{ProviderError, ProviderResult};
pub use models::{
	CompositionFood, CompositionSearch, EncyclopediaSummary, IdentifierList, OverexposureRisk,
	ProbeReport, ProductHit, ProductSearch, RegistryAdditive, StructureIdentifiers,
	TaxonomyDocument, TaxonomyNode,
};
pub use outcome::ProviderOutcome;
pub use traits::{
	CompositionProvider, EncyclopediaProvider, RegistryProvider, StructureProvider,
};
