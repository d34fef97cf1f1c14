//! ToxiScan Configuration
//!
//! Configuration management and startup utilities for the ToxiScan aggregator.

pub mod loader;
pub mod settings;
pub mod startup;

pub use loader::load_config;
pub use settings::{
	LogFormat, LoggingSettings, ProviderSettings, ServerSettings, Settings, TimeoutSettings,
};
pub use startup::{log_service_info, log_startup_complete};
