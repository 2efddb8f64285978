//! Templater configuration

use crate::base::Dialect;

/// Default size limit, in bytes, above which files are skipped.
pub const DEFAULT_LARGE_FILE_SKIP_BYTE_LIMIT: usize = 20_000;

/// Per-run settings handed to the templater by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Forwarded to the tokenizer. Must not be empty.
    pub dialect: Dialect,
    /// Files larger than this are skipped; `None` or `0` disables the check.
    pub large_file_skip_byte_limit: Option<usize>,
}

impl RenderConfig {
    pub fn new(dialect: impl Into<Dialect>) -> Self {
        Self {
            dialect: dialect.into(),
            large_file_skip_byte_limit: Some(DEFAULT_LARGE_FILE_SKIP_BYTE_LIMIT),
        }
    }

    /// Set the dialect
    pub fn with_dialect(mut self, dialect: impl Into<Dialect>) -> Self {
        self.dialect = dialect.into();
        self
    }

    /// Set the large file limit
    pub fn with_large_file_skip_byte_limit(mut self, limit: Option<usize>) -> Self {
        self.large_file_skip_byte_limit = limit;
        self
    }

    /// The effective size limit, if any.
    pub fn byte_limit(&self) -> Option<usize> {
        self.large_file_skip_byte_limit.filter(|&limit| limit > 0)
    }
}

impl Default for RenderConfig {
    /// An empty dialect: usable only once a dialect is set.
    fn default() -> Self {
        Self::new(Dialect::new(""))
    }
}
