//! Normalized query identity

/// The canonical `(code, name)` pair resolved from raw user input.
///
/// `code`, when present, is a lowercased E-number such as `e330`. `name` is
/// never empty for non-empty input; unparseable input degrades to a
/// code-less identifier rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryIdentifier {
	pub code: Option<String>,
	pub name: String,
}

impl QueryIdentifier {
	pub fn new(code: Option<String>, name: impl Into<String>) -> Self {
		Self {
			code,
			name: name.into(),
		}
	}

	/// Identifier with no resolvable code, only a free-text name.
	pub fn without_code(name: impl Into<String>) -> Self {
		Self::new(None, name)
	}

	pub fn has_code(&self) -> bool {
		self.code.is_some()
	}
}
