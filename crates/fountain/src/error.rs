//! CLI error types.

use fountain_config::ConfigError;
use fountain_renderer::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("Invalid screenplay document {path}: {source}")]
    Document {
        path: String,
        source: serde_json::Error,
    },
}
