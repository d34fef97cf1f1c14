//! Process-lifetime taxonomy index
//!
//! Built once at startup from the registry's bulk taxonomy export, then
//! read concurrently by all requests. Never mutated after build, so no
//! lock is required.

use std::collections::HashMap;

use tracing::{info, warn};

use toxiscan_types::{ProviderOutcome, RegistryProvider, TaxonomyDocument, TaxonomyEntry};

#[derive(Debug, Default)]
pub struct TaxonomyIndex {
	/// Lowercased code or name → code.
	keys: HashMap<String, String>,
	/// Code → full entry.
	entries: HashMap<String, TaxonomyEntry>,
	/// Flat searchable list of codes and original-cased names, in build
	/// order.
	search_list: Vec<String>,
}

impl TaxonomyIndex {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Build the index from a bulk taxonomy document. Each entry
	/// contributes its lowercased code; when an English display name
	/// exists it also contributes the lowercased name as an alias plus the
	/// original-cased name in the searchable list.
	pub fn from_document(document: TaxonomyDocument) -> Self {
		let mut index = Self::empty();

		for (key, node) in document {
			let code = key
				.rsplit(':')
				.next()
				.unwrap_or(key.as_str())
				.to_lowercase();

			index.keys.insert(code.clone(), code.clone());
			index.search_list.push(code.clone());

			let mut entry = TaxonomyEntry {
				code: code.clone(),
				canonical_name: None,
				aliases: vec![code.clone()],
			};

			if let Some(name) = node.name.get("en") {
				let alias = name.to_lowercase();
				index.keys.insert(alias.clone(), code.clone());
				index.search_list.push(name.clone());
				entry.canonical_name = Some(name.clone());
				entry.aliases.push(alias);
			}

			index.entries.insert(code, entry);
		}

		index
	}

	/// Fetch the bulk document and build the index. Failure leaves the
	/// index empty and the process serving: name resolution and
	/// autocomplete degrade, nothing else.
	pub async fn load(registry: &dyn RegistryProvider) -> Self {
		match registry.taxonomy().await {
			ProviderOutcome::Ok(document) => {
				let index = Self::from_document(document);
				info!(entries = index.len(), "taxonomy loaded");
				index
			},
			ProviderOutcome::Absent => {
				warn!("taxonomy unavailable; continuing with an empty index");
				Self::empty()
			},
			ProviderOutcome::Failed(err) => {
				warn!(error = %err, "taxonomy load failed; continuing with an empty index");
				Self::empty()
			},
		}
	}

	/// Resolve a code or name to its code.
	pub fn resolve_code(&self, key: &str) -> Option<&str> {
		self.keys
			.get(&key.trim().to_lowercase())
			.map(String::as_str)
	}

	pub fn lookup(&self, key: &str) -> Option<&TaxonomyEntry> {
		self.entries.get(self.resolve_code(key)?)
	}

	/// Case-insensitive substring search over the flat list, returning at
	/// most `limit` matches in build order.
	pub fn search(&self, fragment: &str, limit: usize) -> Vec<String> {
		let fragment = fragment.to_lowercase();
		self.search_list
			.iter()
			.filter(|candidate| candidate.to_lowercase().contains(&fragment))
			.take(limit)
			.cloned()
			.collect()
	}

	/// Number of searchable entries.
	pub fn len(&self) -> usize {
		self.search_list.len()
	}

	pub fn is_empty(&self) -> bool {
		self.search_list.is_empty()
	}
}
