//! Error types for render operations.

use text_size::TextSize;
use thiserror::Error;

use crate::base::FileId;

/// What the host should do when a render fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// The file cannot be rendered; skip it and carry on with the run.
    SkipFile,
    /// The templater was invoked incorrectly; abort the whole run.
    Abort,
}

/// Errors that can occur while rendering a model file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The source text is empty.
    #[error("Skipping empty file: {file}")]
    EmptyInput { file: FileId },

    /// No `SELECT` keyword was found outside comments and strings.
    #[error("Skipping file with no SELECT statement to render: {file}")]
    NoRenderableStatement { file: FileId },

    /// The templater was called without a configuration or dialect.
    #[error("A configuration object with a dialect must be provided to the templater.")]
    MissingConfiguration,

    /// A function-call macro's `(` is never closed inside the statement.
    #[error("Unterminated macro call in {file}: '(' at offset {offset:?} is never closed")]
    MalformedMacroArguments { file: FileId, offset: TextSize },

    /// The source exceeds the configured size limit.
    #[error("Skipping large file {file}: {size} bytes exceeds the limit of {limit} bytes")]
    LargeFile {
        file: FileId,
        size: usize,
        limit: usize,
    },

    /// The source bytes are not valid UTF-8.
    #[error("Skipping file that is not valid UTF-8: {file} ({reason})")]
    InvalidEncoding { file: FileId, reason: String },
}

impl RenderError {
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::MissingConfiguration => Disposition::Abort,
            Self::EmptyInput { .. }
            | Self::NoRenderableStatement { .. }
            | Self::MalformedMacroArguments { .. }
            | Self::LargeFile { .. }
            | Self::InvalidEncoding { .. } => Disposition::SkipFile,
        }
    }

    /// Check if the host should skip the file and continue
    pub fn is_skip(&self) -> bool {
        self.disposition() == Disposition::SkipFile
    }

    /// The file the error is about, if any
    pub fn file(&self) -> Option<&FileId> {
        match self {
            Self::MissingConfiguration => None,
            Self::EmptyInput { file }
            | Self::NoRenderableStatement { file }
            | Self::MalformedMacroArguments { file, .. }
            | Self::LargeFile { file, .. }
            | Self::InvalidEncoding { file, .. } => Some(file),
        }
    }
}
