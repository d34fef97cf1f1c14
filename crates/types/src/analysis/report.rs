//! Final analysis report returned to API callers

use serde::{Deserialize, Serialize};

use crate::analysis::QueryIdentifier;

/// Risk classification derived from the layered decision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
	Low,
	Moderate,
	High,
}

impl RiskLevel {
	/// Parse a provider-supplied risk string. Unrecognized values yield
	/// `None` so the caller can fall through to the next policy layer.
	pub fn parse_loose(value: &str) -> Option<Self> {
		match value.trim().to_lowercase().as_str() {
			"low" => Some(Self::Low),
			"moderate" => Some(Self::Moderate),
			"high" => Some(Self::High),
			_ => None,
		}
	}

	pub fn badge(self) -> RiskBadge {
		match self {
			Self::High => RiskBadge::new("High Risk / Avoid", "bg-red-600 text-white", "⚠️"),
			Self::Moderate => RiskBadge::new("Moderate Caution", "bg-yellow-500 text-black", "✋"),
			Self::Low => RiskBadge::new("Safe / Low Risk", "bg-emerald-600 text-white", "✅"),
		}
	}
}

/// Display badge for a risk level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBadge {
	pub label: String,
	pub color: String,
	pub icon: String,
}

impl RiskBadge {
	fn new(label: &str, color: &str, icon: &str) -> Self {
		Self {
			label: label.to_string(),
			color: color.to_string(),
			icon: icon.to_string(),
		}
	}
}

/// Origin classification derived from the description keyword scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginCategory {
	Synthetic,
	Natural,
	Unknown,
}

impl OriginCategory {
	pub fn label(self) -> &'static str {
		match self {
			Self::Synthetic => "Synthetic / Artificial",
			Self::Natural => "Natural Origin",
			Self::Unknown => "Origin Unknown",
		}
	}
}

/// A product known to contain the additive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedProduct {
	pub name: String,
	pub image_url: Option<String>,
}

/// Identity as presented to callers: title-cased name, upper-cased code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportIdentity {
	pub name: String,
	pub code: String,
}

impl From<&QueryIdentifier> for ReportIdentity {
	fn from(identity: &QueryIdentifier) -> Self {
		Self {
			name: title_case(&identity.name),
			code: identity
				.code
				.as_deref()
				.map(str::to_uppercase)
				.unwrap_or_else(|| "Unknown".to_string()),
		}
	}
}

/// The consolidated safety profile returned by `GET /api/analyze/{query}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
	pub identity: ReportIdentity,
	pub risk_level: RiskLevel,
	pub safety: RiskBadge,
	pub origin: OriginCategory,
	pub origin_label: String,
	pub description: String,
	pub verified_in_food_database: bool,
	pub structure_image: String,
	pub products: Vec<RelatedProduct>,
}

/// Capitalize the first letter of each whitespace-separated word, lowering
/// the rest, e.g. `"citric ACID"` becomes `"Citric Acid"`.
pub fn title_case(input: &str) -> String {
	input
		.split_whitespace()
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => {
					first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
				},
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn title_case_normalizes_mixed_case_words() {
		assert_eq!(title_case("citric ACID"), "Citric Acid");
		assert_eq!(title_case("  monosodium   glutamate "), "Monosodium Glutamate");
		assert_eq!(title_case(""), "");
	}

	#[test]
	fn report_identity_upper_cases_code_and_defaults_to_unknown() {
		let with_code = QueryIdentifier::new(Some("e330".to_string()), "citric acid");
		let identity = ReportIdentity::from(&with_code);
		assert_eq!(identity.code, "E330");
		assert_eq!(identity.name, "Citric Acid");

		let without = QueryIdentifier::without_code("mystery goo");
		assert_eq!(ReportIdentity::from(&without).code, "Unknown");
	}

	#[test]
	fn risk_level_parses_provider_strings_loosely() {
		assert_eq!(RiskLevel::parse_loose(" High "), Some(RiskLevel::High));
		assert_eq!(RiskLevel::parse_loose("moderate"), Some(RiskLevel::Moderate));
		assert_eq!(RiskLevel::parse_loose("en:unranked"), None);
	}

	#[test]
	fn risk_level_serializes_lowercase() {
		assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
		assert_eq!(
			serde_json::to_string(&OriginCategory::Synthetic).unwrap(),
			"\"synthetic\""
		);
	}
}
