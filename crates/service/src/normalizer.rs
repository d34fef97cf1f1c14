//! Identifier normalization
//!
//! Parses raw query text into a canonical `(code, name)` pair. Unparseable
//! input never raises: it degrades to a code-less identifier, which is a
//! valid if low-confidence identity.

use std::sync::LazyLock;

use regex::Regex;

use toxiscan_types::QueryIdentifier;

use crate::taxonomy::TaxonomyIndex;

/// Explicit `e330 - citric acid` style input: code, separator, name.
static CODE_NAME_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(e\d+)\s*[-–_]\s*(.+)$").unwrap());

/// Leading `e<digits>` + separator fragment on a name string.
static CODE_PREFIX_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^e\d+\s*[-–_]\s*").unwrap());

/// Resolve raw query text into a normalized identity.
///
/// The explicit `code - name` split takes precedence over every other
/// resolution path; after that the taxonomy index supplies codes for known
/// names, and bare `e<digits>`-shaped input is treated as a code.
pub fn normalize(raw_query: &str, taxonomy: &TaxonomyIndex) -> QueryIdentifier {
	let cleaned = raw_query.trim().to_lowercase();

	if let Some(captures) = CODE_NAME_RE.captures(&cleaned) {
		return QueryIdentifier::new(
			Some(captures[1].to_string()),
			captures[2].trim().to_string(),
		);
	}

	if let Some(code) = taxonomy.resolve_code(&cleaned) {
		return QueryIdentifier::new(Some(code.to_string()), cleaned);
	}

	if looks_like_code(&cleaned) {
		return QueryIdentifier::new(Some(cleaned.clone()), cleaned);
	}

	QueryIdentifier::without_code(cleaned)
}

fn looks_like_code(value: &str) -> bool {
	let mut chars = value.chars();
	chars.next() == Some('e') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Strip a leading code fragment from a name so provider queries never
/// include it. Idempotent: a second application is a no-op.
pub fn strip_code_prefix(name: &str) -> String {
	let mut current = name.trim().to_string();
	loop {
		let stripped = CODE_PREFIX_RE.replace(&current, "").trim().to_string();
		if stripped == current {
			return current;
		}
		current = stripped;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn empty_index() -> TaxonomyIndex {
		TaxonomyIndex::empty()
	}

	#[test]
	fn splits_explicit_code_name_input() {
		let identity = normalize("E330 - Citric Acid", &empty_index());
		assert_eq!(identity.code.as_deref(), Some("e330"));
		assert_eq!(identity.name, "citric acid");
	}

	#[test]
	fn accepts_every_documented_separator() {
		for raw in ["e330-citric acid", "e330 – citric acid", "e330_citric acid"] {
			let identity = normalize(raw, &empty_index());
			assert_eq!(identity.code.as_deref(), Some("e330"), "input: {raw}");
			assert_eq!(identity.name, "citric acid", "input: {raw}");
		}
	}

	#[test]
	fn explicit_split_beats_taxonomy_resolution() {
		let mut document = toxiscan_types::TaxonomyDocument::new();
		document.insert(
			"en:e300".to_string(),
			toxiscan_types::TaxonomyNode {
				name: [("en".to_string(), "E330 - Citric Acid".to_string())].into(),
			},
		);
		let index = TaxonomyIndex::from_document(document);

		let identity = normalize("E330 - Citric Acid", &index);
		assert_eq!(identity.code.as_deref(), Some("e330"));
	}

	#[test]
	fn taxonomy_supplies_code_for_known_names() {
		let mut document = toxiscan_types::TaxonomyDocument::new();
		document.insert(
			"en:e330".to_string(),
			toxiscan_types::TaxonomyNode {
				name: [("en".to_string(), "Citric acid".to_string())].into(),
			},
		);
		let index = TaxonomyIndex::from_document(document);

		let identity = normalize("Citric Acid", &index);
		assert_eq!(identity.code.as_deref(), Some("e330"));
		assert_eq!(identity.name, "citric acid");
	}

	#[test]
	fn bare_code_input_is_its_own_name() {
		let identity = normalize("e171", &empty_index());
		assert_eq!(identity.code.as_deref(), Some("e171"));
		assert_eq!(identity.name, "e171");
	}

	#[test]
	fn e_prefix_without_digit_is_not_a_code() {
		let identity = normalize("egg yolk", &empty_index());
		assert!(identity.code.is_none());
		assert_eq!(identity.name, "egg yolk");
	}

	#[test]
	fn unparseable_input_degrades_to_nameonly_identity() {
		let identity = normalize("  Mystery Goo  ", &empty_index());
		assert!(identity.code.is_none());
		assert_eq!(identity.name, "mystery goo");
	}

	#[test]
	fn strip_code_prefix_removes_leading_fragment() {
		assert_eq!(strip_code_prefix("E330 - Citric Acid"), "Citric Acid");
		assert_eq!(strip_code_prefix("e102_tartrazine"), "tartrazine");
		assert_eq!(strip_code_prefix("Citric Acid"), "Citric Acid");
	}

	#[test]
	fn strip_code_prefix_is_idempotent() {
		for input in [
			"E330 - Citric Acid",
			"e330 - e331 - sodium citrate",
			"plain name",
			"",
		] {
			let once = strip_code_prefix(input);
			assert_eq!(strip_code_prefix(&once), once, "input: {input}");
		}
	}
}
