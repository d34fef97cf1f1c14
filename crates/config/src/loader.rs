//! Configuration loading utilities

use config::{Config, ConfigError, Environment, File};

use crate::Settings;

/// Load configuration from the optional config file, overlaid with
/// `TOXISCAN_`-prefixed environment variables
/// (e.g. `TOXISCAN_SERVER__PORT=9001`).
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(
			Environment::with_prefix("TOXISCAN")
				.separator("__")
				.try_parsing(true),
		)
		.build()?;

	s.try_deserialize()
}
