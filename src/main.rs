//! ToxiScan Server
//!
//! Main entry point for the aggregator server

use toxiscan::ToxiscanBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	ToxiscanBuilder::new().start_server().await
}
