//! CLI error types.

use lingua_config::ConfigError;
use lingua_insert_tags::UnsupportedTagError;
use lingua_page::RepositoryError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Repository(#[from] RepositoryError),

    #[error("{0}")]
    UnsupportedTag(#[from] UnsupportedTagError),
}
