//! The token stream consumed by the statement bounder.

use text_size::TextRange;

use super::lexer::Lexer;
use crate::base::Dialect;

/// What the statement bounder needs to know about a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    SelectKeyword,
    StatementSeparator,
    Other,
}

/// A classified token covering a half-open byte range of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }
}

/// Splits source text into tokens ordered by start offset.
///
/// Implementations must be deterministic and side-effect free: the same
/// `(text, dialect)` pair always yields the same tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str, dialect: &Dialect) -> Vec<Token>;
}

/// The default dialect-agnostic [`Tokenizer`] backed by [`Lexer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlLexer;

impl Tokenizer for SqlLexer {
    fn tokenize(&self, text: &str, dialect: &Dialect) -> Vec<Token> {
        let tokens: Vec<Token> = Lexer::new(text)
            .filter(|lexeme| !lexeme.kind.is_trivia())
            .map(|lexeme| Token::new(lexeme.kind.token_kind(), lexeme.range))
            .collect();
        tracing::trace!(%dialect, count = tokens.len(), "tokenized source");
        tokens
    }
}
