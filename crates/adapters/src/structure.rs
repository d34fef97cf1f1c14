//! Chemical structure lookup adapter
//!
//! Resolves an additive name to the first numeric compound identifier the
//! structure database knows for it.

use async_trait::async_trait;
use tracing::debug;

use toxiscan_config::Settings;
use toxiscan_types::{
	ProbeReport, ProviderOutcome, ProviderResult, StructureIdentifiers, StructureProvider,
};

use crate::http;

#[derive(Debug, Clone)]
pub struct StructureAdapter {
	client: reqwest::Client,
	name_url: String,
	probe_timeout_ms: u64,
}

impl StructureAdapter {
	pub fn from_settings(settings: &Settings) -> ProviderResult<Self> {
		let client = http::build_client(
			&settings.providers.user_agent,
			settings.timeouts.request_ms,
		)?;

		Ok(Self {
			client,
			name_url: settings.providers.structure_name_url.clone(),
			probe_timeout_ms: settings.timeouts.probe_ms,
		})
	}

	fn cid_lookup_url(&self, name: &str) -> String {
		format!(
			"{}/{}/cids/JSON",
			self.name_url.trim_end_matches('/'),
			http::encode_segment(name)
		)
	}
}

#[async_trait]
impl StructureProvider for StructureAdapter {
	async fn compound_cid(&self, name: &str) -> ProviderOutcome<u64> {
		let cleaned = name.trim();
		if cleaned.is_empty() {
			return ProviderOutcome::Absent;
		}

		let url = self.cid_lookup_url(cleaned);
		debug!(name = cleaned, "structure identifier lookup");

		let outcome: ProviderOutcome<StructureIdentifiers> =
			http::send_json(self.client.get(&url)).await;
		match outcome {
			ProviderOutcome::Ok(identifiers) => match identifiers.first_cid() {
				Some(cid) => ProviderOutcome::Ok(cid),
				None => ProviderOutcome::Absent,
			},
			ProviderOutcome::Absent => ProviderOutcome::Absent,
			ProviderOutcome::Failed(err) => ProviderOutcome::Failed(err),
		}
	}

	async fn probe(&self) -> ProbeReport {
		let url = self.cid_lookup_url("aspirin");
		http::probe_url(&self.client, "structure", &url, self.probe_timeout_ms).await
	}
}

#[cfg(test)]
mod tests {
	use toxiscan_config::Settings;

	use super::*;

	#[test]
	fn lookup_url_percent_encodes_the_name() {
		let adapter = StructureAdapter::from_settings(&Settings::default()).unwrap();
		let url = adapter.cid_lookup_url("citric acid");
		assert!(url.ends_with("/compound/name/citric%20acid/cids/JSON"));
	}
}
