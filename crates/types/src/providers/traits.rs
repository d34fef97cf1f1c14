//! Core provider traits
//!
//! One trait per external data source. The orchestrator holds each as
//! `Arc<dyn …>` so tests can substitute mock implementations.

use std::fmt::Debug;

use async_trait::async_trait;

use super::{
	EncyclopediaSummary, ProbeReport, ProviderOutcome, RegistryAdditive, TaxonomyDocument,
};
use crate::analysis::RelatedProduct;

/// The additive registry: per-code lookup, bulk taxonomy export, and
/// product search.
#[async_trait]
pub trait RegistryProvider: Send + Sync + Debug {
	/// Look up one additive by its lowercased code (e.g. `e330`).
	async fn additive_by_code(&self, code: &str) -> ProviderOutcome<RegistryAdditive>;

	/// Fetch the bulk taxonomy document. Called once at process startup.
	async fn taxonomy(&self) -> ProviderOutcome<TaxonomyDocument>;

	/// Search products tagged with the additive code or name.
	async fn search_products(&self, tag: &str) -> ProviderOutcome<Vec<RelatedProduct>>;

	/// Cheap reachability check against a known-good resource.
	async fn probe(&self) -> ProbeReport;
}

/// The encyclopedia summary source.
#[async_trait]
pub trait EncyclopediaProvider: Send + Sync + Debug {
	/// Fetch the page summary for an additive name.
	async fn summary(&self, name: &str) -> ProviderOutcome<EncyclopediaSummary>;

	async fn probe(&self) -> ProbeReport;
}

/// The food composition database used to verify that an additive name is a
/// recognized food-data entry.
#[async_trait]
pub trait CompositionProvider: Send + Sync + Debug {
	/// Returns true iff the cleaned name matches the top search result.
	/// Absent without any network call when no credential is configured.
	async fn verify(&self, name: &str) -> ProviderOutcome<bool>;

	async fn probe(&self) -> ProbeReport;
}

/// The chemical structure database used to resolve a numeric compound
/// identifier for structure imagery.
#[async_trait]
pub trait StructureProvider: Send + Sync + Debug {
	/// First compound identifier matching the name.
	async fn compound_cid(&self, name: &str) -> ProviderOutcome<u64>;

	async fn probe(&self) -> ProbeReport;
}
