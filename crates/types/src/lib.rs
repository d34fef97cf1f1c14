//! ToxiScan Types
//!
//! Shared models and traits for the ToxiScan additive aggregator.
//! This crate contains all domain models organized by business entity.

pub mod analysis;
pub mod providers;
pub mod taxonomy;

// Re-export commonly used types for convenience
pub use analysis::{
	title_case, AnalysisReport, CanonicalRecord, OriginCategory, QueryIdentifier, RelatedProduct,
	ReportIdentity, RiskBadge, RiskLevel, DESCRIPTION_UNAVAILABLE,
};

pub use providers::{
	CompositionFood, CompositionProvider, CompositionSearch, EncyclopediaProvider,
	EncyclopediaSummary, IdentifierList, OverexposureRisk, ProbeReport, ProductHit, ProductSearch,
	ProviderError, ProviderOutcome, ProviderResult, RegistryAdditive, RegistryProvider,
	StructureIdentifiers, StructureProvider, TaxonomyDocument, TaxonomyNode,
};

pub use taxonomy::TaxonomyEntry;
