//! Provider response models
//!
//! One narrow structured type per provider response, parsed at the adapter
//! boundary so the rest of the pipeline never touches raw untyped JSON.
//! Missing fields degrade to empty values rather than parse errors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::RiskLevel;

/// Per-code additive record from the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryAdditive {
	#[serde(default)]
	pub display_name_translations: HashMap<String, String>,
	pub overexposure_risk: Option<OverexposureRisk>,
}

impl RegistryAdditive {
	/// Preferred display name: English first, then French.
	pub fn display_name(&self) -> Option<&str> {
		self.display_name_translations
			.get("en")
			.or_else(|| self.display_name_translations.get("fr"))
			.map(String::as_str)
	}

	/// Structured risk field, when present and recognizable.
	pub fn structured_risk(&self) -> Option<RiskLevel> {
		self.overexposure_risk
			.as_ref()?
			.risk
			.as_deref()
			.and_then(RiskLevel::parse_loose)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverexposureRisk {
	pub risk: Option<String>,
}

/// Page summary from the encyclopedia.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncyclopediaSummary {
	pub title: Option<String>,
	pub extract: Option<String>,
}

/// Search response from the food composition database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionSearch {
	#[serde(rename = "totalHits", default)]
	pub total_hits: u64,
	#[serde(default)]
	pub foods: Vec<CompositionFood>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionFood {
	#[serde(default)]
	pub description: String,
}

/// Identifier lookup response from the chemical structure database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureIdentifiers {
	#[serde(rename = "IdentifierList")]
	pub identifier_list: Option<IdentifierList>,
}

impl StructureIdentifiers {
	pub fn first_cid(&self) -> Option<u64> {
		self.identifier_list
			.as_ref()
			.and_then(|list| list.cid.first().copied())
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentifierList {
	#[serde(rename = "CID", default)]
	pub cid: Vec<u64>,
}

/// Product search response from the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSearch {
	#[serde(default)]
	pub products: Vec<ProductHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductHit {
	pub product_name: Option<String>,
	pub image_front_small_url: Option<String>,
}

/// Bulk taxonomy export from the registry, keyed by prefixed additive code
/// (e.g. `en:e330`).
pub type TaxonomyDocument = HashMap<String, TaxonomyNode>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyNode {
	#[serde(default)]
	pub name: HashMap<String, String>,
}

/// Reachability report from a provider probe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
	pub provider: String,
	pub reachable: bool,
	pub latency_ms: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
}
