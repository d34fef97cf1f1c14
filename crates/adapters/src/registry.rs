//! Additive registry adapter
//!
//! Covers the three registry operations: per-code additive lookup, bulk
//! taxonomy export, and product search by additive tag.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use toxiscan_config::Settings;
use toxiscan_types::{
	ProbeReport, ProductSearch, ProviderOutcome, ProviderResult, RegistryAdditive,
	RegistryProvider, RelatedProduct, TaxonomyDocument,
};

use crate::http;

#[derive(Debug, Clone)]
pub struct RegistryAdapter {
	client: reqwest::Client,
	additive_url: String,
	search_url: String,
	taxonomy_url: String,
	taxonomy_timeout_ms: u64,
	probe_timeout_ms: u64,
}

impl RegistryAdapter {
	pub fn from_settings(settings: &Settings) -> ProviderResult<Self> {
		let client = http::build_client(
			&settings.providers.user_agent,
			settings.timeouts.request_ms,
		)?;

		Ok(Self {
			client,
			additive_url: settings.providers.registry_additive_url.clone(),
			search_url: settings.providers.registry_search_url.clone(),
			taxonomy_url: settings.providers.registry_taxonomy_url.clone(),
			taxonomy_timeout_ms: settings.timeouts.taxonomy_ms,
			probe_timeout_ms: settings.timeouts.probe_ms,
		})
	}

	/// Codes occasionally arrive with trailing annotations; the registry
	/// path wants the bare code only.
	fn clean_code(code: &str) -> &str {
		code.split_whitespace().next().unwrap_or(code)
	}
}

#[async_trait]
impl RegistryProvider for RegistryAdapter {
	async fn additive_by_code(&self, code: &str) -> ProviderOutcome<RegistryAdditive> {
		let code = Self::clean_code(code);
		if code.is_empty() {
			return ProviderOutcome::Absent;
		}

		let url = match http::join_url(&self.additive_url, code) {
			Ok(url) => url,
			Err(err) => return ProviderOutcome::Failed(err),
		};

		debug!(code, "registry additive lookup");
		http::send_json(self.client.get(&url)).await
	}

	async fn taxonomy(&self) -> ProviderOutcome<TaxonomyDocument> {
		debug!(url = %self.taxonomy_url, "fetching bulk taxonomy");
		let request = self
			.client
			.get(&self.taxonomy_url)
			.timeout(Duration::from_millis(self.taxonomy_timeout_ms));
		http::send_json(request).await
	}

	async fn search_products(&self, tag: &str) -> ProviderOutcome<Vec<RelatedProduct>> {
		if tag.is_empty() {
			return ProviderOutcome::Absent;
		}

		let request = self.client.get(&self.search_url).query(&[
			("additives_tags", tag),
			("page_size", "3"),
			("fields", "product_name,image_front_small_url"),
		]);

		let outcome: ProviderOutcome<ProductSearch> = http::send_json(request).await;
		outcome.map(|search| {
			search
				.products
				.into_iter()
				.map(|hit| RelatedProduct {
					name: hit.product_name.unwrap_or_default(),
					image_url: hit.image_front_small_url,
				})
				.collect()
		})
	}

	async fn probe(&self) -> ProbeReport {
		let url = http::join_url(&self.additive_url, "e330")
			.unwrap_or_else(|_| self.additive_url.clone());
		http::probe_url(&self.client, "registry", &url, self.probe_timeout_ms).await
	}
}
