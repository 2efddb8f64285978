use std::fmt;

use smol_str::SmolStr;

/// SQL dialect name, e.g. `postgres` or `bigquery`.
///
/// The templater never interprets it; it is forwarded verbatim to the
/// [`Tokenizer`](crate::lexer::Tokenizer).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dialect(SmolStr);

impl Dialect {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(SmolStr::new(name.as_ref().trim()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// A dialect with no name cannot be handed to a tokenizer.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Dialect {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
