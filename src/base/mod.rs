//! Foundation types for the templater.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Opaque file names echoed into results and errors
//! - [`Dialect`] - The SQL dialect name forwarded to the tokenizer
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other templater modules.

mod dialect;
mod file_id;
mod span;

pub use dialect::Dialect;
pub use file_id::FileId;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
