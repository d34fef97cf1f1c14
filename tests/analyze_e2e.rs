//! End-to-end scenarios for the analyze endpoint

mod mocks;

use std::sync::Arc;
use std::time::{Duration, Instant};

use toxiscan::mocks::{
	sample_additive, sample_taxonomy, MockComposition, MockEncyclopedia, MockRegistry,
	MockStructure,
};
use toxiscan::types::{OverexposureRisk, RegistryAdditive};
use toxiscan::{AnalysisReport, OriginCategory, RiskLevel, Settings, ToxiscanBuilder};

use mocks::TestServer;

fn builder_with(
	registry: MockRegistry,
	encyclopedia: MockEncyclopedia,
	composition: MockComposition,
	structure: MockStructure,
) -> ToxiscanBuilder {
	ToxiscanBuilder::new()
		.with_registry(Arc::new(registry))
		.with_encyclopedia(Arc::new(encyclopedia))
		.with_composition(Arc::new(composition))
		.with_structure(Arc::new(structure))
}

async fn fetch_report(server: &TestServer, query: &str) -> AnalysisReport {
	let url = format!("{}/api/analyze/{}", server.base_url, query);
	let response = reqwest::get(&url).await.expect("request failed");
	assert_eq!(response.status(), 200);
	response.json().await.expect("report body")
}

#[tokio::test]
async fn explicit_code_name_query_resolves_both_parts() {
	let server = TestServer::spawn(builder_with(
		MockRegistry::empty(),
		MockEncyclopedia::with_extract(
			"Citric acid is a weak organic acid found naturally in citrus fruits.",
		),
		MockComposition::verified(true),
		MockStructure::with_cid(311),
	))
	.await
	.unwrap();

	let report = fetch_report(&server, "E330%20-%20Citric%20Acid").await;

	assert_eq!(report.identity.code, "E330");
	assert_eq!(report.identity.name, "Citric Acid");
	// e330 has no override entry, so risk falls through to the scan.
	assert_eq!(report.risk_level, RiskLevel::Low);
	assert_eq!(report.origin, OriginCategory::Natural);
	assert!(report.verified_in_food_database);
	assert!(report.structure_image.contains("/cid/311/"));
}

#[tokio::test]
async fn override_table_wins_regardless_of_other_signals() {
	// The registry reports titanium dioxide as low risk with a benign
	// description; the curated override still classifies it high.
	let additive = RegistryAdditive {
		display_name_translations: [("en".to_string(), "Titanium dioxide".to_string())].into(),
		overexposure_risk: Some(OverexposureRisk {
			risk: Some("low".to_string()),
		}),
	};

	let server = TestServer::spawn(builder_with(
		MockRegistry::with_additive(additive),
		MockEncyclopedia::with_extract("A white pigment used in confectionery."),
		MockComposition::absent(),
		MockStructure::absent(),
	))
	.await
	.unwrap();

	let report = fetch_report(&server, "e171").await;

	assert_eq!(report.identity.name, "Titanium Dioxide");
	assert_eq!(report.risk_level, RiskLevel::High);
	assert_eq!(report.safety.label, "High Risk / Avoid");
}

#[tokio::test]
async fn moderate_keywords_classify_moderate_without_other_signals() {
	let server = TestServer::spawn(builder_with(
		MockRegistry::empty(),
		MockEncyclopedia::with_extract("It has been linked to hyperactivity in children."),
		MockComposition::absent(),
		MockStructure::absent(),
	))
	.await
	.unwrap();

	let report = fetch_report(&server, "mystery%20additive").await;

	assert_eq!(report.risk_level, RiskLevel::Moderate);
	assert_eq!(report.safety.label, "Moderate Caution");
	assert_eq!(report.identity.code, "Unknown");
}

#[tokio::test]
async fn taxonomy_resolves_plain_names_to_codes() {
	let server = TestServer::spawn(builder_with(
		MockRegistry::with_taxonomy(sample_taxonomy()),
		MockEncyclopedia::absent(),
		MockComposition::absent(),
		MockStructure::absent(),
	))
	.await
	.unwrap();

	let report = fetch_report(&server, "Citric%20Acid").await;
	assert_eq!(report.identity.code, "E330");
}

#[tokio::test]
async fn registry_display_name_feeds_the_report_identity() {
	let server = TestServer::spawn(builder_with(
		MockRegistry::with_additive(sample_additive("Curcumin")),
		MockEncyclopedia::absent(),
		MockComposition::absent(),
		MockStructure::absent(),
	))
	.await
	.unwrap();

	let report = fetch_report(&server, "e100").await;
	assert_eq!(report.identity.name, "Curcumin");
	assert_eq!(report.identity.code, "E100");
}

#[tokio::test]
async fn all_slow_providers_degrade_within_the_global_budget() {
	let slow = Duration::from_secs(30);
	let mut settings = Settings::default();
	settings.timeouts.global_ms = 300;

	let server = TestServer::spawn(
		builder_with(
			MockRegistry::empty().delayed(slow),
			MockEncyclopedia::with_extract("never arrives").delayed(slow),
			MockComposition::verified(true).delayed(slow),
			MockStructure::with_cid(311).delayed(slow),
		)
		.with_settings(settings),
	)
	.await
	.unwrap();

	let started = Instant::now();
	let report = fetch_report(&server, "mystery%20goo").await;

	assert!(
		started.elapsed() < Duration::from_secs(5),
		"response took {:?}",
		started.elapsed()
	);
	assert_eq!(report.description, "Description unavailable.");
	assert_eq!(report.origin, OriginCategory::Unknown);
	assert!(!report.verified_in_food_database);
	assert!(report.products.is_empty());
}

#[tokio::test]
async fn blank_query_surfaces_as_a_generic_error_body() {
	let server = TestServer::spawn(builder_with(
		MockRegistry::empty(),
		MockEncyclopedia::absent(),
		MockComposition::absent(),
		MockStructure::absent(),
	))
	.await
	.unwrap();

	let url = format!("{}/api/analyze/%20%20", server.base_url);
	let response = reqwest::get(&url).await.unwrap();
	assert_eq!(response.status(), 500);

	let body: serde_json::Value = response.json().await.unwrap();
	assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn related_products_flow_through_to_the_report() {
	let registry = MockRegistry {
		products: vec![toxiscan::RelatedProduct {
			name: "Lemon Fizz".to_string(),
			image_url: Some("https://images.example.org/lemon-fizz.jpg".to_string()),
		}],
		..MockRegistry::default()
	};

	let server = TestServer::spawn(builder_with(
		registry,
		MockEncyclopedia::absent(),
		MockComposition::absent(),
		MockStructure::absent(),
	))
	.await
	.unwrap();

	let report = fetch_report(&server, "e330").await;
	assert_eq!(report.products.len(), 1);
	assert_eq!(report.products[0].name, "Lemon Fizz");
}
