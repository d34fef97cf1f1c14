//! Core aggregation service logic
//!
//! Sequences the normalizer, the registry lookup the canonical name
//! depends on, and the concurrent fan-out to the remaining providers,
//! then merges their partial results into one report.

use std::sync::Arc;

use futures::future::{join_all, BoxFuture};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use toxiscan_types::{
	AnalysisReport, CanonicalRecord, CompositionProvider, EncyclopediaProvider, ProbeReport,
	ProviderOutcome, QueryIdentifier, RegistryProvider, ReportIdentity, StructureProvider,
	DESCRIPTION_UNAVAILABLE,
};

use crate::classifier;
use crate::normalizer;
use crate::taxonomy::TaxonomyIndex;

/// Faults surfaced from the orchestration boundary. Provider absence is
/// not among them: a missing provider degrades a single field, never the
/// request.
#[derive(Error, Debug)]
pub enum AnalysisError {
	#[error("query is empty after normalization")]
	EmptyQuery,
}

/// Service resolving one raw query into a consolidated analysis report.
pub struct AnalysisService {
	registry: Arc<dyn RegistryProvider>,
	encyclopedia: Arc<dyn EncyclopediaProvider>,
	composition: Arc<dyn CompositionProvider>,
	structure: Arc<dyn StructureProvider>,
	taxonomy: Arc<TaxonomyIndex>,
	global_timeout_ms: u64,
}

impl AnalysisService {
	pub fn new(
		registry: Arc<dyn RegistryProvider>,
		encyclopedia: Arc<dyn EncyclopediaProvider>,
		composition: Arc<dyn CompositionProvider>,
		structure: Arc<dyn StructureProvider>,
		taxonomy: Arc<TaxonomyIndex>,
		global_timeout_ms: u64,
	) -> Self {
		Self {
			registry,
			encyclopedia,
			composition,
			structure,
			taxonomy,
			global_timeout_ms,
		}
	}

	/// Resolve a raw query into a consolidated report.
	pub async fn analyze(&self, raw_query: &str) -> Result<AnalysisReport, AnalysisError> {
		let identity = normalizer::normalize(raw_query, &self.taxonomy);
		if identity.name.is_empty() {
			return Err(AnalysisError::EmptyQuery);
		}
		info!(code = ?identity.code, name = %identity.name, "resolved query identity");

		// Canonical name resolution depends on the registry result, so
		// this lookup runs before the fan-out.
		let registry_record = match &identity.code {
			Some(code) => settle("registry", self.registry.additive_by_code(code).await),
			None => None,
		};

		let canonical_name = registry_record
			.as_ref()
			.and_then(|record| record.display_name())
			.unwrap_or(&identity.name)
			.to_string();
		let canonical_name = normalizer::strip_code_prefix(&canonical_name);
		debug!(name = %canonical_name, "canonical name for provider fan-out");

		let product_tag = identity
			.code
			.clone()
			.unwrap_or_else(|| canonical_name.clone());

		// The four remaining calls are independent; running them
		// concurrently bounds total latency to the slowest single
		// provider rather than their sum.
		let summary_task = tokio::spawn({
			let provider = Arc::clone(&self.encyclopedia);
			let name = canonical_name.clone();
			async move { provider.summary(&name).await }
		});
		let verify_task = tokio::spawn({
			let provider = Arc::clone(&self.composition);
			let name = canonical_name.clone();
			async move { provider.verify(&name).await }
		});
		let cid_task = tokio::spawn({
			let provider = Arc::clone(&self.structure);
			let name = canonical_name.clone();
			async move { provider.compound_cid(&name).await }
		});
		let products_task = tokio::spawn({
			let provider = Arc::clone(&self.registry);
			async move { provider.search_products(&product_tag).await }
		});

		// Join, not race: no early cancellation of stragglers. Expiry of
		// the global budget degrades every outstanding field to absent.
		let joined = async move {
			tokio::join!(summary_task, verify_task, cid_task, products_task)
		};
		let (summary, verified, cid, products) =
			match timeout(Duration::from_millis(self.global_timeout_ms), joined).await {
				Ok((summary, verified, cid, products)) => (
					settle("encyclopedia", unwrap_task(summary)),
					settle("composition", unwrap_task(verified)),
					settle("structure", unwrap_task(cid)),
					settle("products", unwrap_task(products)),
				),
				Err(_) => {
					warn!(
						timeout_ms = self.global_timeout_ms,
						"provider fan-out hit the global timeout"
					);
					(None, None, None, None)
				},
			};

		let mut sources = Vec::new();
		if registry_record.is_some() {
			sources.push("registry".to_string());
		}
		if summary.is_some() {
			sources.push("encyclopedia".to_string());
		}

		let description = summary
			.and_then(|s| s.extract)
			.unwrap_or_else(|| DESCRIPTION_UNAVAILABLE.to_string());

		let record = CanonicalRecord {
			identity: QueryIdentifier::new(identity.code, canonical_name.clone()),
			description,
			structured_risk: registry_record
				.as_ref()
				.and_then(|additive| additive.structured_risk()),
			sources,
		};

		let risk_level = classifier::classify_risk(
			record.identity.code.as_deref(),
			record.structured_risk,
			&record.description,
		);
		let origin = classifier::classify_origin(&record.description);
		let structure_image = classifier::structure_image_url(cid, &canonical_name);

		Ok(AnalysisReport {
			identity: ReportIdentity::from(&record.identity),
			risk_level,
			safety: risk_level.badge(),
			origin,
			origin_label: origin.label().to_string(),
			description: record.description,
			verified_in_food_database: verified.unwrap_or(false),
			structure_image,
			products: products.unwrap_or_default(),
		})
	}

	/// Concurrent reachability probes across all providers.
	pub async fn probe_all(&self) -> Vec<ProbeReport> {
		let probes: Vec<BoxFuture<'_, ProbeReport>> = vec![
			Box::pin(self.registry.probe()),
			Box::pin(self.encyclopedia.probe()),
			Box::pin(self.composition.probe()),
			Box::pin(self.structure.probe()),
		];
		join_all(probes).await
	}

	pub fn taxonomy(&self) -> &TaxonomyIndex {
		&self.taxonomy
	}
}

/// Collapse a provider outcome into an optional value, logging faults.
fn settle<T>(provider: &str, outcome: ProviderOutcome<T>) -> Option<T> {
	match outcome {
		ProviderOutcome::Ok(value) => Some(value),
		ProviderOutcome::Absent => {
			debug!(provider, "provider returned no data");
			None
		},
		ProviderOutcome::Failed(err) => {
			warn!(provider, error = %err, "provider call failed");
			None
		},
	}
}

/// A panicked or aborted provider task degrades to absence, like any
/// other provider fault.
fn unwrap_task<T>(result: Result<ProviderOutcome<T>, JoinError>) -> ProviderOutcome<T> {
	result.unwrap_or_else(|err| {
		warn!(error = %err, "provider task aborted");
		ProviderOutcome::Absent
	})
}
