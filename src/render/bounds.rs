//! Statement Bounder
//!
//! Finds the single statement that gets rendered: from the first `SELECT`
//! keyword through its statement separator, or to the end of input.

use text_size::{TextRange, TextSize};

use crate::lexer::{Token, TokenKind};

/// Location of the statement to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementBounds {
    /// `[select_start, select_end)`, separator included.
    pub statement: TextRange,
    /// The separator terminating the statement, if there is one.
    pub separator: Option<TextRange>,
}

impl StatementBounds {
    pub fn select_start(&self) -> TextSize {
        self.statement.start()
    }

    pub fn select_end(&self) -> TextSize {
        self.statement.end()
    }

    /// The part of the statement that is rendered. The separator is
    /// consumed, not copied.
    pub fn region(&self) -> TextRange {
        match self.separator {
            Some(separator) => TextRange::new(self.select_start(), separator.start()),
            None => self.statement,
        }
    }
}

/// Locate the first `SELECT` statement in `tokens`.
///
/// Returns `None` when there is no `SELECT` keyword at all. Later `SELECT`s
/// (subqueries, further statements) are ordinary text.
pub fn find_statement(tokens: &[Token], source_len: TextSize) -> Option<StatementBounds> {
    let mut tokens = tokens.iter();
    let select_start = tokens
        .by_ref()
        .find(|token| token.kind == TokenKind::SelectKeyword)?
        .range
        .start();

    let separator = tokens
        .find(|token| {
            token.kind == TokenKind::StatementSeparator && token.range.start() >= select_start
        })
        .map(|token| token.range);

    let select_end = separator
        .map_or(source_len, |separator| separator.end())
        .max(select_start);
    Some(StatementBounds {
        statement: TextRange::new(select_start, select_end),
        separator,
    })
}
