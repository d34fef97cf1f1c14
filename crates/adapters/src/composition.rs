//! Food composition verification adapter
//!
//! Requires an external credential. An unset credential is a hard
//! precondition, not a retryable fault: verification is skipped without
//! issuing any network request.

use async_trait::async_trait;
use tracing::debug;

use toxiscan_config::Settings;
use toxiscan_types::{
	CompositionProvider, CompositionSearch, ProbeReport, ProviderOutcome, ProviderResult,
};

use crate::http;

#[derive(Debug, Clone)]
pub struct CompositionAdapter {
	client: reqwest::Client,
	search_url: String,
	api_key: Option<String>,
	probe_timeout_ms: u64,
}

impl CompositionAdapter {
	pub fn from_settings(settings: &Settings) -> ProviderResult<Self> {
		let client = http::build_client(
			&settings.providers.user_agent,
			settings.timeouts.request_ms,
		)?;

		Ok(Self {
			client,
			search_url: settings.providers.composition_search_url.clone(),
			api_key: settings.providers.composition_api_key.clone(),
			probe_timeout_ms: settings.timeouts.probe_ms,
		})
	}
}

#[async_trait]
impl CompositionProvider for CompositionAdapter {
	async fn verify(&self, name: &str) -> ProviderOutcome<bool> {
		let Some(api_key) = &self.api_key else {
			debug!("composition credential unset; skipping verification");
			return ProviderOutcome::Absent;
		};

		let query = name.trim();
		if query.is_empty() {
			return ProviderOutcome::Absent;
		}

		let request = self.client.get(&self.search_url).query(&[
			("api_key", api_key.as_str()),
			("query", query),
			("dataType", "Foundation"),
			("dataType", "SR Legacy"),
			("pageSize", "1"),
		]);

		let outcome: ProviderOutcome<CompositionSearch> = http::send_json(request).await;
		let query_lower = query.to_lowercase();
		outcome.map(|search| {
			search.total_hits > 0
				&& search
					.foods
					.first()
					.is_some_and(|food| food.description.to_lowercase().contains(&query_lower))
		})
	}

	async fn probe(&self) -> ProbeReport {
		// A placeholder key is enough to test reachability.
		let key = self.api_key.as_deref().unwrap_or("DEMO_KEY");
		let request = self
			.client
			.get(&self.search_url)
			.query(&[("api_key", key), ("query", "apple"), ("pageSize", "1")]);
		let url = match request.build() {
			Ok(request) => request.url().to_string(),
			Err(_) => self.search_url.clone(),
		};
		http::probe_url(&self.client, "composition", &url, self.probe_timeout_ms).await
	}
}
