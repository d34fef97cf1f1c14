//! ToxiScan Library
//!
//! A best-effort aggregator that resolves food additive identifiers
//! (E-numbers or free-text names) into consolidated safety profiles by
//! querying multiple independent data sources, reconciling their
//! disagreements, and classifying the result.

pub mod mocks;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use toxiscan_adapters::{
	CompositionAdapter, EncyclopediaAdapter, RegistryAdapter, StructureAdapter,
};
use toxiscan_service::{AnalysisService, TaxonomyIndex};

// Core domain types - the most commonly used
pub use toxiscan_types::{
	AnalysisReport, CompositionProvider, EncyclopediaProvider, OriginCategory, ProbeReport,
	ProviderError, ProviderOutcome, QueryIdentifier, RegistryProvider, RelatedProduct,
	RiskLevel, StructureProvider,
};

// Service layer
pub use toxiscan_service::AnalysisError;

// API layer
pub use toxiscan_api::{create_router, AppState};

// Config
pub use toxiscan_config::{
	load_config, log_service_info, log_startup_complete, LogFormat, Settings,
};

// Module aliases for direct access to the member crates
pub mod types {
	pub use toxiscan_types::*;
}

pub mod service {
	pub use toxiscan_service::*;
}

pub mod adapters {
	pub use toxiscan_adapters::*;
}

pub mod api {
	pub use toxiscan_api::*;
}

pub mod config {
	pub use toxiscan_config::*;
}

/// Builder pattern for configuring the aggregator
///
/// Providers default to the real HTTP adapters built from settings; each
/// can be overridden, which is how tests inject mocks.
#[derive(Default)]
pub struct ToxiscanBuilder {
	settings: Option<Settings>,
	registry: Option<Arc<dyn RegistryProvider>>,
	encyclopedia: Option<Arc<dyn EncyclopediaProvider>>,
	composition: Option<Arc<dyn CompositionProvider>>,
	structure: Option<Arc<dyn StructureProvider>>,
}

impl ToxiscanBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Override the registry provider
	pub fn with_registry(mut self, provider: Arc<dyn RegistryProvider>) -> Self {
		self.registry = Some(provider);
		self
	}

	/// Override the encyclopedia provider
	pub fn with_encyclopedia(mut self, provider: Arc<dyn EncyclopediaProvider>) -> Self {
		self.encyclopedia = Some(provider);
		self
	}

	/// Override the composition provider
	pub fn with_composition(mut self, provider: Arc<dyn CompositionProvider>) -> Self {
		self.composition = Some(provider);
		self
	}

	/// Override the structure provider
	pub fn with_structure(mut self, provider: Arc<dyn StructureProvider>) -> Self {
		self.structure = Some(provider);
		self
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(&self, settings: &Settings) {
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

		match settings.logging.format {
			LogFormat::Json => tracing_subscriber::fmt()
				.json()
				.with_env_filter(env_filter)
				.init(),
			LogFormat::Pretty => tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter)
				.init(),
			LogFormat::Compact => tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter)
				.init(),
		}
	}

	/// Build everything up to the router: hydrate settings, construct the
	/// providers, preload the taxonomy index, and wire the application
	/// state.
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let mut settings = self.settings.unwrap_or_default();
		settings.hydrate_credentials();

		let registry: Arc<dyn RegistryProvider> = match self.registry {
			Some(provider) => provider,
			None => Arc::new(RegistryAdapter::from_settings(&settings)?),
		};
		let encyclopedia: Arc<dyn EncyclopediaProvider> = match self.encyclopedia {
			Some(provider) => provider,
			None => Arc::new(EncyclopediaAdapter::from_settings(&settings)?),
		};
		let composition: Arc<dyn CompositionProvider> = match self.composition {
			Some(provider) => provider,
			None => Arc::new(CompositionAdapter::from_settings(&settings)?),
		};
		let structure: Arc<dyn StructureProvider> = match self.structure {
			Some(provider) => provider,
			None => Arc::new(StructureAdapter::from_settings(&settings)?),
		};

		// Startup taxonomy preload. Failure leaves the index empty and the
		// service running.
		let taxonomy = Arc::new(TaxonomyIndex::load(registry.as_ref()).await);
		info!(
			"initialized with {} taxonomy entries",
			taxonomy.len()
		);

		let analysis_service = Arc::new(AnalysisService::new(
			registry,
			encyclopedia,
			composition,
			structure,
			Arc::clone(&taxonomy),
			settings.timeouts.global_ms,
		));

		let app_state = AppState {
			analysis_service,
			taxonomy,
		};
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup handled:
	/// `.env` loading, configuration, tracing, taxonomy preload, and the
	/// HTTP listener.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		self.init_tracing_from_settings(&settings);
		log_service_info();
		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _state) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /ready");
		info!("  GET  /api/analyze/{{query}}");
		info!("  GET  /api/autocomplete?q=<fragment>");

		axum::serve(listener, app).await?;

		Ok(())
	}
}
