//! Syntax kinds produced by the SQL lexer

use super::token::TokenKind;

/// Lexical categories of SQL source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,        // account_id
    QUOTED_IDENT, // "staging" or `staging`
    NUMBER,       // 42, 3.14, 1e9
    STRING,       // 'PL'

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    SELECT_KW,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    AT,        // @
    L_PAREN,   // (
    R_PAREN,   // )
    COMMA,     // ,
    DOT,       // .
    SEMICOLON, // ;
    SYMBOL,    // any other operator character

    ERROR,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Collapse into the three kinds the statement bounder cares about.
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::SELECT_KW => TokenKind::SelectKeyword,
            Self::SEMICOLON => TokenKind::StatementSeparator,
            _ => TokenKind::Other,
        }
    }
}
