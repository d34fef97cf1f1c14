//! Test server for integration tests
//!
//! Spawns the full application on an ephemeral port so tests exercise the
//! real router, handlers, and orchestration.

use axum::Router;
use tokio::task::JoinHandle;

use toxiscan::{AppState, ToxiscanBuilder};

/// Test server instance bound to an ephemeral local port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
	#[allow(dead_code)]
	pub state: AppState,
}

impl TestServer {
	/// Spawn a server from a fully configured builder
	pub async fn spawn(builder: ToxiscanBuilder) -> Result<Self, Box<dyn std::error::Error>> {
		let (router, state) = builder.start().await?;
		Self::spawn_with_app(router, state).await
	}

	async fn spawn_with_app(
		app: Router,
		state: AppState,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;

		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.expect("test server crashed");
		});

		Ok(Self {
			base_url: format!("http://{addr}"),
			handle,
			state,
		})
	}
}

impl Drop for TestServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}
