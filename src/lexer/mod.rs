//! Tokenizer Adapter
//!
//! The render engine only needs to know where the first `SELECT` starts and
//! where its statement separator is. Anything able to answer that can be
//! plugged in through the [`Tokenizer`] trait; [`SqlLexer`] is the default,
//! a logos-based lexer that understands enough SQL lexical structure
//! (comments, quoted strings, quoted identifiers) to never mistake a `;` or
//! `select` inside them for the real thing.
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Lexemes with SyntaxKind
//!     ↓
//! SqlLexer → Tokens with TokenKind (SELECT / separator / other)
//! ```

#[allow(clippy::module_inception)]
mod lexer;
pub(crate) mod scan;
mod syntax_kind;
mod token;

pub use lexer::{Lexeme, Lexer, tokenize};
pub use syntax_kind::SyntaxKind;
pub use token::{SqlLexer, Token, TokenKind, Tokenizer};
