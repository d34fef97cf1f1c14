//! Encyclopedia summary adapter
//!
//! The target system is case- and whitespace-sensitive: page titles are
//! title-cased with underscores as the word joiner.

use async_trait::async_trait;
use tracing::debug;

use toxiscan_config::Settings;
use toxiscan_types::{
	title_case, EncyclopediaProvider, EncyclopediaSummary, ProbeReport, ProviderOutcome,
	ProviderResult,
};

use crate::http;

#[derive(Debug, Clone)]
pub struct EncyclopediaAdapter {
	client: reqwest::Client,
	summary_url: String,
	probe_timeout_ms: u64,
}

impl EncyclopediaAdapter {
	pub fn from_settings(settings: &Settings) -> ProviderResult<Self> {
		let client = http::build_client(
			&settings.providers.user_agent,
			settings.timeouts.request_ms,
		)?;

		Ok(Self {
			client,
			summary_url: settings.providers.encyclopedia_summary_url.clone(),
			probe_timeout_ms: settings.timeouts.probe_ms,
		})
	}

	/// `"citric acid"` becomes `"Citric_Acid"`.
	fn page_title(name: &str) -> String {
		title_case(name).replace(' ', "_")
	}
}

#[async_trait]
impl EncyclopediaProvider for EncyclopediaAdapter {
	async fn summary(&self, name: &str) -> ProviderOutcome<EncyclopediaSummary> {
		let title = Self::page_title(name);
		if title.is_empty() {
			return ProviderOutcome::Absent;
		}

		let url = match http::join_url(&self.summary_url, &http::encode_segment(&title)) {
			Ok(url) => url,
			Err(err) => return ProviderOutcome::Failed(err),
		};

		debug!(title, "encyclopedia summary lookup");
		http::send_json(self.client.get(&url)).await
	}

	async fn probe(&self) -> ProbeReport {
		let url = http::join_url(&self.summary_url, "Citric_Acid")
			.unwrap_or_else(|_| self.summary_url.clone());
		http::probe_url(&self.client, "encyclopedia", &url, self.probe_timeout_ms).await
	}
}
