//! Taxonomy domain model

/// One additive known to the registry taxonomy.
///
/// Built once at process startup from the bulk registry document and
/// immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyEntry {
	/// Lowercased code, e.g. `e330`.
	pub code: String,
	/// English display name, when the registry carries one.
	pub canonical_name: Option<String>,
	/// Lowercased keys that resolve to this entry.
	pub aliases: Vec<String>,
}
