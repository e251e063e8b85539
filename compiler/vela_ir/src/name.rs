//! Canonical symbol names.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A VeLa symbol name, canonicalized to uppercase.
///
/// VeLa symbols are case-insensitive: `x` and `X` denote the same binding.
/// Canonicalization happens once, at construction, so comparisons and
/// hashing are plain string operations afterwards.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Name {
    /// Create a name from source text, uppercasing it.
    pub fn new(text: &str) -> Self {
        if text.chars().any(char::is_lowercase) {
            Name(Arc::from(text.to_uppercase()))
        } else {
            Name(Arc::from(text))
        }
    }

    /// The canonical (uppercase) spelling.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}
