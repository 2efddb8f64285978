//! Host-facing entry point.
//!
//! [`SqlMeshTemplater`] is what a linter host talks to: it checks the call
//! is well-formed (configuration present, file not empty or too large),
//! then runs the [render pipeline](crate::render).

mod config;

pub use config::{DEFAULT_LARGE_FILE_SKIP_BYTE_LIMIT, RenderConfig};

use std::sync::Arc;

use rayon::prelude::*;

use crate::base::FileId;
use crate::lexer::{SqlLexer, Tokenizer};
use crate::render::{self, RenderError, RenderResult};

/// Renders SQLMesh model files for a linter.
#[derive(Clone)]
pub struct SqlMeshTemplater {
    tokenizer: Arc<dyn Tokenizer>,
}

impl SqlMeshTemplater {
    pub const NAME: &'static str = "sqlmesh";

    pub fn new() -> Self {
        Self::with_tokenizer(SqlLexer)
    }

    /// Use a different tokenizer, e.g. one that knows the host's dialects.
    pub fn with_tokenizer(tokenizer: impl Tokenizer + 'static) -> Self {
        Self {
            tokenizer: Arc::new(tokenizer),
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Info about this templater for output by the host's CLI.
    pub fn config_pairs(&self) -> Vec<(&'static str, &'static str)> {
        vec![("templater", Self::NAME)]
    }

    /// Render one file.
    pub fn process(
        &self,
        source: &str,
        file: &FileId,
        config: Option<&RenderConfig>,
    ) -> Result<RenderResult, RenderError> {
        let config = config
            .filter(|config| !config.dialect.is_empty())
            .ok_or(RenderError::MissingConfiguration)?;

        if source.is_empty() {
            return Err(RenderError::EmptyInput { file: file.clone() });
        }
        let limit = config.byte_limit().unwrap_or(usize::MAX);
        let limit = limit.min(u32::MAX as usize - 1);
        if source.len() > limit {
            return Err(RenderError::LargeFile {
                file: file.clone(),
                size: source.len(),
                limit,
            });
        }

        tracing::debug!(%file, dialect = %config.dialect, bytes = source.len(), "rendering file");
        let result = render::render(source, file, &config.dialect, self.tokenizer.as_ref());
        match &result {
            Ok(rendered) => tracing::debug!(
                %file,
                rendered_len = rendered.rendered_text.len(),
                slices = rendered.mapped_slices.len(),
                "rendered file"
            ),
            Err(err) => tracing::debug!(%file, %err, "render failed"),
        }
        result
    }

    /// Render one file given as raw bytes.
    pub fn process_bytes(
        &self,
        source: &[u8],
        file: &FileId,
        config: Option<&RenderConfig>,
    ) -> Result<RenderResult, RenderError> {
        let source = std::str::from_utf8(source).map_err(|err| RenderError::InvalidEncoding {
            file: file.clone(),
            reason: err.to_string(),
        })?;
        self.process(source, file, config)
    }

    /// Render many files in parallel. Results are in input order.
    pub fn process_batch(
        &self,
        files: &[(FileId, String)],
        config: Option<&RenderConfig>,
    ) -> Vec<Result<RenderResult, RenderError>> {
        files
            .par_iter()
            .map(|(file, source)| self.process(source, file, config))
            .collect()
    }
}

impl Default for SqlMeshTemplater {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SqlMeshTemplater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlMeshTemplater")
            .field("name", &Self::NAME)
            .finish_non_exhaustive()
    }
}
