//! Byte-level scanning helpers shared by the lexer and the macro scanner.
//!
//! All delimiters are ASCII, so every length returned here ends on a UTF-8
//! character boundary of the scanned text.

/// Scan the body of a quoted literal whose opening `quote` has already been
/// consumed. A doubled quote is an escaped quote.
///
/// Returns the length up to and including the closing quote, or `None` if
/// the literal is unterminated.
pub(crate) fn quoted_len(rest: &[u8], quote: u8) -> Option<usize> {
    let mut i = 0;
    while i < rest.len() {
        if rest[i] == quote {
            if rest.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return Some(i + 1);
        }
        i += 1;
    }
    None
}

/// Scan the body of a block comment whose `/*` has already been consumed.
///
/// Returns the length up to and including `*/`, or `None` if unterminated.
pub(crate) fn block_comment_len(rest: &[u8]) -> Option<usize> {
    rest.windows(2).position(|w| w == b"*/").map(|i| i + 2)
}

/// Scan the body of a line comment whose `--` has already been consumed.
///
/// The terminating newline is not part of the comment.
pub(crate) fn line_comment_len(rest: &[u8]) -> usize {
    rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len())
}

/// Length of the lexically opaque construct (quoted literal or comment)
/// starting at `bytes[0]`, or `None` if `bytes` does not start one.
///
/// Unterminated constructs run to the end of `bytes`.
pub(crate) fn opaque_len(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [quote @ (b'\'' | b'"' | b'`'), rest @ ..] => {
            Some(1 + quoted_len(rest, *quote).unwrap_or(rest.len()))
        }
        [b'-', b'-', rest @ ..] => Some(2 + line_comment_len(rest)),
        [b'/', b'*', rest @ ..] => Some(2 + block_comment_len(rest).unwrap_or(rest.len())),
        _ => None,
    }
}
