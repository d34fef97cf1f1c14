//! Service startup logging
//!
//! Logs service, environment, and system information when the process
//! starts.

use std::env;

use tracing::info;

/// Logs service information at startup
pub fn log_service_info() {
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== ToxiScan Service Starting ===");
	info!("🚀 Service: toxiscan v{}", service_version);
	info!("💻 Platform: {}", env::consts::OS);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ ToxiScan Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
