//! Configuration settings structures

use std::env;

use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub providers: ProviderSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

impl Settings {
	/// Full bind address for the HTTP listener.
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Fill credentials from process environment where the config file left
	/// them unset. The composition credential is optional; its absence
	/// disables that provider without failing requests.
	pub fn hydrate_credentials(&mut self) {
		if self.providers.composition_api_key.is_none() {
			self.providers.composition_api_key = env::var("USDA_API_KEY").ok();
		}
	}
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8000,
		}
	}
}

/// Upstream provider endpoints and credentials
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProviderSettings {
	/// Per-code additive lookup, registry role.
	pub registry_additive_url: String,
	/// Product search, registry role.
	pub registry_search_url: String,
	/// Bulk taxonomy export fetched once at startup.
	pub registry_taxonomy_url: String,
	/// Page summary lookup, encyclopedia role.
	pub encyclopedia_summary_url: String,
	/// Food search, composition-database role.
	pub composition_search_url: String,
	/// Compound-by-name base, structure-database role.
	pub structure_name_url: String,
	/// Credential for the composition database. Unset disables verification.
	pub composition_api_key: Option<String>,
	/// Identifying header required by at least one provider to avoid
	/// automated-traffic blocking.
	pub user_agent: String,
}

impl Default for ProviderSettings {
	fn default() -> Self {
		Self {
			registry_additive_url: "https://world.openfoodfacts.org/api/v2/additive".to_string(),
			registry_search_url: "https://world.openfoodfacts.org/api/v2/search".to_string(),
			registry_taxonomy_url:
				"https://static.openfoodfacts.org/data/taxonomies/additives.json".to_string(),
			encyclopedia_summary_url: "https://en.wikipedia.org/api/rest_v1/page/summary"
				.to_string(),
			composition_search_url: "https://api.nal.usda.gov/fdc/v1/foods/search".to_string(),
			structure_name_url: "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name"
				.to_string(),
			composition_api_key: None,
			user_agent: "ToxiScan/1.0".to_string(),
		}
	}
}

/// Timeout configuration. All values are tunables, not contracts.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Per-call HTTP timeout for analysis provider requests.
	pub request_ms: u64,
	/// Timeout for the startup taxonomy bulk fetch.
	pub taxonomy_ms: u64,
	/// Global budget for the concurrent provider fan-out.
	pub global_ms: u64,
	/// Per-probe timeout for readiness checks.
	pub probe_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			request_ms: 20_000,
			taxonomy_ms: 15_000,
			global_ms: 20_000,
			probe_ms: 10_000,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
		}
	}
}

/// Log output formats
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Pretty,
	#[default]
	Compact,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_carry_real_endpoints() {
		let settings = Settings::default();
		assert!(settings.providers.registry_additive_url.contains("additive"));
		assert_eq!(settings.bind_address(), "0.0.0.0:8000");
		assert!(settings.providers.composition_api_key.is_none());
	}

	#[test]
	fn partial_config_deserializes_over_defaults() {
		let settings: Settings =
			serde_json::from_str(r#"{"server": {"port": 9001}, "timeouts": {"global_ms": 500}}"#)
				.unwrap();
		assert_eq!(settings.server.port, 9001);
		assert_eq!(settings.server.host, "0.0.0.0");
		assert_eq!(settings.timeouts.global_ms, 500);
		assert_eq!(settings.timeouts.request_ms, 20_000);
	}
}
