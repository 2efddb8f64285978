//! Logos-based lexer for SQL
//!
//! Fast tokenization using the logos crate. The lexer is lossless: every
//! byte of the input belongs to exactly one lexeme.

use super::scan;
use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A lexeme with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Inputs must be shorter than `u32::MAX` bytes.
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::new(span.start as u32),
            TextSize::new(span.end as u32),
        );

        let kind = match logos_token {
            Ok(LogosToken::Ident) if text.eq_ignore_ascii_case("select") => SyntaxKind::SELECT_KW,
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Lexeme { kind, text, range })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Lexeme<'_>> {
    Lexer::new(input).collect()
}

/// Consume the rest of a block comment; an unterminated one runs to EOF.
fn block_comment(lex: &mut logos::Lexer<'_, LogosToken>) {
    let rest = lex.remainder().as_bytes();
    lex.bump(scan::block_comment_len(rest).unwrap_or(rest.len()));
}

/// Consume the rest of a quoted literal; an unterminated one runs to EOF.
fn quoted(lex: &mut logos::Lexer<'_, LogosToken>, quote: u8) {
    let rest = lex.remainder().as_bytes();
    lex.bump(scan::quoted_len(rest, quote).unwrap_or(rest.len()));
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"--[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_$\x{80}-\x{10FFFF}]*")]
    Ident,

    #[token("\"", |lex| quoted(lex, b'"'))]
    #[token("`", |lex| quoted(lex, b'`'))]
    QuotedIdent,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,

    #[token("'", |lex| quoted(lex, b'\''))]
    String,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("@")]
    At,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(";")]
    Semicolon,

    #[regex(r"[+\-*/%<>=!|&\^~:?\[\]{}#$\\]")]
    Symbol,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            QuotedIdent => SyntaxKind::QUOTED_IDENT,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,

            // Punctuation
            At => SyntaxKind::AT,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Semicolon => SyntaxKind::SEMICOLON,
            Symbol => SyntaxKind::SYMBOL,
        }
    }
}
