//! Error types for part rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for render operations.
pub type MakeResult<T> = Result<T, MakeError>;

/// Errors that can occur while rendering parts.
#[derive(Debug, Error)]
pub enum MakeError {
    /// Requested part is not in the catalog.
    #[error("unknown part '{name}' (known parts: {known})")]
    InvalidPartName { name: String, known: String },

    /// The renderer executable could not be found on PATH.
    #[error("renderer '{program}' not found; is OpenSCAD installed?")]
    RendererNotFound { program: String },

    /// Spawning the renderer process failed.
    #[error("failed to launch renderer '{program}'")]
    RendererLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The renderer exited with a non-zero status.
    #[error("renderer failed while generating {} (exit code {})", output.display(), code_label(*code))]
    RenderFailed {
        output: PathBuf,
        /// Child exit code; `None` when the child was killed by a signal.
        code: Option<i32>,
    },
}

fn code_label(code: Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "unknown".to_string(),
    }
}

impl MakeError {
    pub fn invalid_part(name: impl Into<String>, known: &[&str]) -> Self {
        Self::InvalidPartName {
            name: name.into(),
            known: known.join(", "),
        }
    }
}
