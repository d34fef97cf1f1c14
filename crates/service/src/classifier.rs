//! Layered risk and origin classification
//!
//! Risk policy, strict precedence: curated override table, then the
//! registry's structured risk field, then a keyword scan of the
//! description. Origin is keyword-scan only, synthetic terms checked
//! before natural ones.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use toxiscan_types::{OriginCategory, RiskLevel};

/// Curated overrides for additives with well-established risk profiles.
/// A hit here is authoritative; no further signal is consulted.
const KNOWN_RISKS: &[(&str, RiskLevel)] = &[
	// Nitrites / nitrates
	("e249", RiskLevel::High),
	("e250", RiskLevel::High),
	("e251", RiskLevel::High),
	("e252", RiskLevel::High),
	// MSG
	("e621", RiskLevel::Moderate),
	// Aspartame / acesulfame K
	("e951", RiskLevel::Moderate),
	("e950", RiskLevel::Moderate),
	// Artificial colors
	("e102", RiskLevel::Moderate),
	("e129", RiskLevel::Moderate),
	("e133", RiskLevel::Moderate),
	// Titanium dioxide
	("e171", RiskLevel::High),
	// Sulfur dioxide
	("e220", RiskLevel::Moderate),
	// Sodium benzoate
	("e211", RiskLevel::Moderate),
	// BHA / BHT
	("e320", RiskLevel::High),
	("e321", RiskLevel::High),
	// Potassium bromate
	("e924", RiskLevel::High),
];

const HIGH_RISK_TERMS: &[&str] = &["carcinogen", "cancer", "banned", "toxic", "dna damage"];

const MODERATE_RISK_TERMS: &[&str] = &[
	"hyperactivity",
	"allergy",
	"asthma",
	"migraine",
	"intolerance",
	"children",
];

const SYNTHETIC_TERMS: &[&str] = &[
	"petroleum",
	"artificial",
	"synthetic",
	"lab",
	"chemical synthesis",
	"coal tar",
	"preservative",
];

const NATURAL_TERMS: &[&str] = &[
	"plant",
	"extracted",
	"natural",
	"fruit",
	"vegetable",
	"fermentation",
	"animal",
	"vitamin",
	"mineral",
];

const STRUCTURE_IMAGE_BASE: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound";
const STRUCTURE_IMAGE_PARAMS: &str = "PNG?record_type=2d&image_size=300x300";

/// Override-table lookup for a lowercased code.
pub fn override_risk(code: &str) -> Option<RiskLevel> {
	KNOWN_RISKS
		.iter()
		.find(|(known, _)| *known == code)
		.map(|(_, level)| *level)
}

/// Derive the risk level. First match wins; signals are never merged.
/// A structured "low" counts as undetermined and falls through to the
/// keyword scan, which can only raise the level.
pub fn classify_risk(
	code: Option<&str>,
	structured: Option<RiskLevel>,
	description: &str,
) -> RiskLevel {
	if let Some(level) = code.and_then(override_risk) {
		return level;
	}

	let level = structured.unwrap_or(RiskLevel::Low);
	if level != RiskLevel::Low {
		return level;
	}

	let text = description.to_lowercase();
	if HIGH_RISK_TERMS.iter().any(|term| text.contains(term)) {
		RiskLevel::High
	} else if MODERATE_RISK_TERMS.iter().any(|term| text.contains(term)) {
		RiskLevel::Moderate
	} else {
		RiskLevel::Low
	}
}

/// Derive the origin category from description text. Synthetic terms are
/// checked first, so mixed-signal text classifies as synthetic.
pub fn classify_origin(description: &str) -> OriginCategory {
	let text = description.trim().to_lowercase();
	if text.is_empty() {
		return OriginCategory::Unknown;
	}

	if SYNTHETIC_TERMS.iter().any(|term| text.contains(term)) {
		OriginCategory::Synthetic
	} else if NATURAL_TERMS.iter().any(|term| text.contains(term)) {
		OriginCategory::Natural
	} else {
		OriginCategory::Unknown
	}
}

/// Structure image URL: prefer the numeric identifier, fall back to a
/// name-based query as a best-effort guess (may 404, not validated).
pub fn structure_image_url(cid: Option<u64>, name: &str) -> String {
	match cid {
		Some(cid) => format!("{STRUCTURE_IMAGE_BASE}/cid/{cid}/{STRUCTURE_IMAGE_PARAMS}"),
		None => {
			let encoded = utf8_percent_encode(name, NON_ALPHANUMERIC);
			format!("{STRUCTURE_IMAGE_BASE}/name/{encoded}/{STRUCTURE_IMAGE_PARAMS}")
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn override_table_is_authoritative() {
		// Structured field and description both say otherwise; the table
		// still wins.
		let level = classify_risk(
			Some("e171"),
			Some(RiskLevel::Low),
			"a perfectly harmless whitening agent",
		);
		assert_eq!(level, RiskLevel::High);

		assert_eq!(
			classify_risk(Some("e621"), None, ""),
			RiskLevel::Moderate
		);
	}

	#[test]
	fn structured_field_used_when_no_override() {
		let level = classify_risk(Some("e330"), Some(RiskLevel::Moderate), "");
		assert_eq!(level, RiskLevel::Moderate);
	}

	#[test]
	fn structured_low_falls_through_to_keyword_scan() {
		let level = classify_risk(
			Some("e330"),
			Some(RiskLevel::Low),
			"classified as a carcinogen in some studies",
		);
		assert_eq!(level, RiskLevel::High);
	}

	#[test]
	fn high_terms_beat_moderate_terms() {
		let level = classify_risk(
			None,
			None,
			"linked to hyperactivity and banned in several countries",
		);
		assert_eq!(level, RiskLevel::High);
	}

	#[test]
	fn moderate_terms_without_high_terms() {
		let level = classify_risk(
			None,
			None,
			"has been linked to hyperactivity in children",
		);
		assert_eq!(level, RiskLevel::Moderate);
	}

	#[test]
	fn keyword_scan_is_case_insensitive() {
		assert_eq!(
			classify_risk(None, None, "possible DNA damage reported"),
			RiskLevel::High
		);
	}

	#[test]
	fn benign_text_stays_low() {
		assert_eq!(
			classify_risk(None, None, "a common acidity regulator"),
			RiskLevel::Low
		);
	}

	#[test]
	fn synthetic_wins_over_natural_when_both_present() {
		let origin = classify_origin("an artificial additive derived from plant material");
		assert_eq!(origin, OriginCategory::Synthetic);
	}

	#[test]
	fn natural_terms_classify_as_natural() {
		assert_eq!(
			classify_origin("obtained by fermentation of sugars"),
			OriginCategory::Natural
		);
	}

	#[test]
	fn empty_or_unmatched_text_is_unknown() {
		assert_eq!(classify_origin(""), OriginCategory::Unknown);
		assert_eq!(
			classify_origin("a food additive of uncertain provenance"),
			OriginCategory::Unknown
		);
	}

	#[test]
	fn image_url_prefers_cid_over_name() {
		let by_cid = structure_image_url(Some(311), "citric acid");
		assert!(by_cid.contains("/cid/311/PNG"));

		let by_name = structure_image_url(None, "citric acid");
		assert!(by_name.contains("/name/citric%20acid/PNG"));
	}
}
