//! Shared HTTP plumbing for provider adapters

use std::time::{Duration, Instant};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use toxiscan_types::{ProbeReport, ProviderError, ProviderOutcome, ProviderResult};

/// Characters percent-encoded when a value is placed in a URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'<')
	.add(b'>')
	.add(b'`')
	.add(b'#')
	.add(b'?')
	.add(b'{')
	.add(b'}')
	.add(b'%')
	.add(b'/');

pub(crate) fn encode_segment(value: &str) -> String {
	utf8_percent_encode(value, SEGMENT).to_string()
}

/// Build a client carrying the identifying header and a fixed per-call
/// timeout. At least one upstream provider blocks traffic without an
/// identifying User-Agent.
pub fn build_client(user_agent: &str, timeout_ms: u64) -> ProviderResult<Client> {
	let mut headers = HeaderMap::new();
	headers.insert(
		"User-Agent",
		HeaderValue::from_str(user_agent).map_err(|e| ProviderError::Endpoint {
			reason: format!("invalid user agent '{}': {}", user_agent, e),
		})?,
	);
	headers.insert("Accept", HeaderValue::from_static("application/json"));

	let client = Client::builder()
		.default_headers(headers)
		.timeout(Duration::from_millis(timeout_ms))
		.build()
		.map_err(ProviderError::Http)?;

	Ok(client)
}

/// Join a path segment onto a base endpoint, treating the base as a
/// directory.
pub(crate) fn join_url(base: &str, path: &str) -> ProviderResult<String> {
	let mut base_url = Url::parse(base).map_err(|e| ProviderError::Endpoint {
		reason: format!("invalid base URL '{}': {}", base, e),
	})?;

	if !base_url.path().ends_with('/') {
		base_url.set_path(&format!("{}/", base_url.path()));
	}

	let joined = base_url.join(path).map_err(|e| ProviderError::Endpoint {
		reason: format!("failed to join '{}' to base '{}': {}", path, base, e),
	})?;

	Ok(joined.to_string())
}

/// Issue a prepared request and decode the JSON body.
///
/// Non-success statuses are absence, not faults; transport and decode
/// errors are faults. One attempt, no retries.
pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ProviderOutcome<T> {
	match request.send().await {
		Ok(response) if response.status().is_success() => match response.json::<T>().await {
			Ok(payload) => ProviderOutcome::Ok(payload),
			Err(err) => ProviderOutcome::Failed(err.into()),
		},
		Ok(response) => {
			debug!(status = %response.status(), "provider returned no data");
			ProviderOutcome::Absent
		},
		Err(err) => ProviderOutcome::Failed(err.into()),
	}
}

/// Timed reachability check against a known-good provider resource.
pub(crate) async fn probe_url(
	client: &Client,
	provider: &str,
	url: &str,
	timeout_ms: u64,
) -> ProbeReport {
	let started = Instant::now();
	let result = client
		.get(url)
		.timeout(Duration::from_millis(timeout_ms))
		.send()
		.await;
	let latency_ms = started.elapsed().as_millis() as u64;

	match result {
		Ok(response) if response.status().is_success() => ProbeReport {
			provider: provider.to_string(),
			reachable: true,
			latency_ms,
			detail: None,
		},
		Ok(response) => ProbeReport {
			provider: provider.to_string(),
			reachable: false,
			latency_ms,
			detail: Some(format!("status {}", response.status())),
		},
		Err(err) => ProbeReport {
			provider: provider.to_string(),
			reachable: false,
			latency_ms,
			detail: Some(err.to_string()),
		},
	}
}
