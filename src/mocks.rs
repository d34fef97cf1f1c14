//! Mock providers for examples and testing
//!
//! Simple fixed-response implementations of the provider traits, with
//! optional per-call delays for timeout scenarios.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use toxiscan_types::{
	CompositionProvider, EncyclopediaProvider, EncyclopediaSummary, ProbeReport, ProviderOutcome,
	RegistryAdditive, RegistryProvider, RelatedProduct, StructureProvider, TaxonomyDocument,
	TaxonomyNode,
};

/// Registry mock serving fixed data
#[derive(Debug, Clone)]
pub struct MockRegistry {
	pub additive: Option<RegistryAdditive>,
	pub taxonomy: TaxonomyDocument,
	pub products: Vec<RelatedProduct>,
	pub delay: Option<Duration>,
	pub reachable: bool,
}

impl Default for MockRegistry {
	fn default() -> Self {
		Self {
			additive: None,
			taxonomy: TaxonomyDocument::new(),
			products: Vec::new(),
			delay: None,
			reachable: true,
		}
	}
}

impl MockRegistry {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn with_taxonomy(taxonomy: TaxonomyDocument) -> Self {
		Self {
			taxonomy,
			..Self::default()
		}
	}

	pub fn with_additive(additive: RegistryAdditive) -> Self {
		Self {
			additive: Some(additive),
			..Self::default()
		}
	}

	pub fn delayed(self, delay: Duration) -> Self {
		Self {
			delay: Some(delay),
			..self
		}
	}

	async fn pause(&self) {
		if let Some(delay) = self.delay {
			sleep(delay).await;
		}
	}
}

#[async_trait]
impl RegistryProvider for MockRegistry {
	async fn additive_by_code(&self, _code: &str) -> ProviderOutcome<RegistryAdditive> {
		self.pause().await;
		match &self.additive {
			Some(additive) => ProviderOutcome::Ok(additive.clone()),
			None => ProviderOutcome::Absent,
		}
	}

	async fn taxonomy(&self) -> ProviderOutcome<TaxonomyDocument> {
		self.pause().await;
		if self.taxonomy.is_empty() {
			ProviderOutcome::Absent
		} else {
			ProviderOutcome::Ok(self.taxonomy.clone())
		}
	}

	async fn search_products(&self, _tag: &str) -> ProviderOutcome<Vec<RelatedProduct>> {
		self.pause().await;
		if self.products.is_empty() {
			ProviderOutcome::Absent
		} else {
			ProviderOutcome::Ok(self.products.clone())
		}
	}

	async fn probe(&self) -> ProbeReport {
		probe_report("registry", self.reachable)
	}
}

/// Encyclopedia mock serving a fixed extract
#[derive(Debug, Clone)]
pub struct MockEncyclopedia {
	pub extract: Option<String>,
	pub delay: Option<Duration>,
	pub reachable: bool,
}

impl Default for MockEncyclopedia {
	fn default() -> Self {
		Self {
			extract: None,
			delay: None,
			reachable: true,
		}
	}
}

impl MockEncyclopedia {
	pub fn absent() -> Self {
		Self::default()
	}

	pub fn with_extract(extract: impl Into<String>) -> Self {
		Self {
			extract: Some(extract.into()),
			..Self::default()
		}
	}

	pub fn delayed(self, delay: Duration) -> Self {
		Self {
			delay: Some(delay),
			..self
		}
	}
}

#[async_trait]
impl EncyclopediaProvider for MockEncyclopedia {
	async fn summary(&self, name: &str) -> ProviderOutcome<EncyclopediaSummary> {
		if let Some(delay) = self.delay {
			sleep(delay).await;
		}
		match &self.extract {
			Some(extract) => ProviderOutcome::Ok(EncyclopediaSummary {
				title: Some(name.to_string()),
				extract: Some(extract.clone()),
			}),
			None => ProviderOutcome::Absent,
		}
	}

	async fn probe(&self) -> ProbeReport {
		probe_report("encyclopedia", self.reachable)
	}
}

/// Composition mock returning a fixed verification verdict
#[derive(Debug, Clone)]
pub struct MockComposition {
	pub verified: Option<bool>,
	pub delay: Option<Duration>,
	pub reachable: bool,
}

impl Default for MockComposition {
	fn default() -> Self {
		Self {
			verified: None,
			delay: None,
			reachable: true,
		}
	}
}

impl MockComposition {
	pub fn absent() -> Self {
		Self::default()
	}

	pub fn verified(verdict: bool) -> Self {
		Self {
			verified: Some(verdict),
			..Self::default()
		}
	}

	pub fn delayed(self, delay: Duration) -> Self {
		Self {
			delay: Some(delay),
			..self
		}
	}
}

#[async_trait]
impl CompositionProvider for MockComposition {
	async fn verify(&self, _name: &str) -> ProviderOutcome<bool> {
		if let Some(delay) = self.delay {
			sleep(delay).await;
		}
		match self.verified {
			Some(verdict) => ProviderOutcome::Ok(verdict),
			None => ProviderOutcome::Absent,
		}
	}

	async fn probe(&self) -> ProbeReport {
		probe_report("composition", self.reachable)
	}
}

/// Structure mock returning a fixed compound identifier
#[derive(Debug, Clone)]
pub struct MockStructure {
	pub cid: Option<u64>,
	pub delay: Option<Duration>,
	pub reachable: bool,
}

impl Default for MockStructure {
	fn default() -> Self {
		Self {
			cid: None,
			delay: None,
			reachable: true,
		}
	}
}

impl MockStructure {
	pub fn absent() -> Self {
		Self::default()
	}

	pub fn with_cid(cid: u64) -> Self {
		Self {
			cid: Some(cid),
			..Self::default()
		}
	}

	pub fn delayed(self, delay: Duration) -> Self {
		Self {
			delay: Some(delay),
			..self
		}
	}
}

#[async_trait]
impl StructureProvider for MockStructure {
	async fn compound_cid(&self, _name: &str) -> ProviderOutcome<u64> {
		if let Some(delay) = self.delay {
			sleep(delay).await;
		}
		match self.cid {
			Some(cid) => ProviderOutcome::Ok(cid),
			None => ProviderOutcome::Absent,
		}
	}

	async fn probe(&self) -> ProbeReport {
		probe_report("structure", self.reachable)
	}
}

fn probe_report(provider: &str, reachable: bool) -> ProbeReport {
	ProbeReport {
		provider: provider.to_string(),
		reachable,
		latency_ms: 1,
		detail: if reachable {
			None
		} else {
			Some("connection refused".to_string())
		},
	}
}

/// A small taxonomy document covering common additives
pub fn sample_taxonomy() -> TaxonomyDocument {
	let entries = [
		("en:e100", Some("Curcumin")),
		("en:e102", Some("Tartrazine")),
		("en:e171", Some("Titanium dioxide")),
		("en:e300", Some("Ascorbic acid")),
		("en:e330", Some("Citric acid")),
		("en:e621", Some("Monosodium glutamate")),
		("en:e999", None),
	];

	let mut document = TaxonomyDocument::new();
	for (key, name) in entries {
		let mut node = TaxonomyNode {
			name: Default::default(),
		};
		if let Some(name) = name {
			node.name.insert("en".to_string(), name.to_string());
		}
		document.insert(key.to_string(), node);
	}
	document
}

/// A registry additive record with an English display name
pub fn sample_additive(name: &str) -> RegistryAdditive {
	RegistryAdditive {
		display_name_translations: [("en".to_string(), name.to_string())].into(),
		overexposure_risk: None,
	}
}
