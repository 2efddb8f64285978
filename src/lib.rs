//! # sqlmesh-templater
//!
//! Renders SQLMesh model files into plain SQL that a generic SQL linter can
//! parse, together with a byte-exact map between the model source and the
//! rendered SQL.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! templater → Host entry point: config, size guard, batch rendering
//!   ↓
//! render    → Statement bounding, macro substitution, slice assembly
//!   ↓
//! lexer     → Logos SQL lexer behind the Tokenizer trait
//!   ↓
//! base      → Primitives (FileId, Dialect, TextRange, LineIndex)
//! ```
//!
//! ## Example
//!
//! ```
//! use sqlmesh_templater::{FileId, RenderConfig, SqlMeshTemplater};
//!
//! let templater = SqlMeshTemplater::new();
//! let config = RenderConfig::new("postgres");
//! let result = templater
//!     .process("SELECT @key(a, b) AS k FROM t;", &FileId::stdin(), Some(&config))
//!     .unwrap();
//! assert_eq!(result.rendered_text, "SELECT key('PLACEHOLDER') AS k FROM t");
//! ```

// ============================================================================
// MODULES (dependency order: base → lexer → render → templater)
// ============================================================================

/// Foundation types: FileId, Dialect, TextRange, LineIndex
pub mod base;

/// Tokenizer Adapter: logos lexer, Tokenizer trait
pub mod lexer;

/// Render pipeline: bounder, substitution engine, assembler, results
pub mod render;

/// Host-facing templater
pub mod templater;

// Re-export foundation types
pub use base::{Dialect, FileId, LineCol, LineIndex, TextRange, TextSize};

pub use lexer::{SqlLexer, Token, TokenKind, Tokenizer};
pub use render::{
    Disposition, MappedSlice, PLACEHOLDER, RawSlice, RenderError, RenderResult, SliceKind, render,
};
pub use templater::{RenderConfig, SqlMeshTemplater};
