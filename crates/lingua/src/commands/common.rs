//! Arguments and setup shared by all commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use lingua_config::{CliSettings, Config};
use lingua_i18n::{LocalizationResolver, RenderContext};
use lingua_page::{JsonRepository, Page, PageRepository};

use crate::error::CliError;

/// Arguments shared by all commands.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover lingua.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page tree JSON file (overrides config).
    #[arg(short, long, env = "LINGUA_PAGES")]
    pages: Option<PathBuf>,

    /// Enable verbose output (log page tree loading and lookups).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration and the page tree it points to.
    pub(crate) fn open(&self, locale: Option<String>) -> Result<Session, CliError> {
        let cli_settings = CliSettings {
            pages_source: self.pages.clone(),
            locale,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let repository = JsonRepository::from_path(&config.pages_resolved.source)?;
        Ok(Session::new(config, repository))
    }
}

/// Loaded configuration and page tree.
pub(crate) struct Session {
    config: Config,
    repository: Arc<dyn PageRepository>,
}

impl Session {
    pub(crate) fn new(config: Config, repository: JsonRepository) -> Self {
        Self {
            config,
            repository: Arc::new(repository),
        }
    }

    /// Create a resolver with an empty cache.
    pub(crate) fn resolver(&self) -> LocalizationResolver {
        LocalizationResolver::new(
            Arc::clone(&self.repository),
            self.config.i18n.localized_page_types.iter().cloned(),
        )
    }

    /// Render context for the configured locale.
    pub(crate) fn context(&self) -> RenderContext {
        RenderContext::new(self.config.i18n.default_locale.as_str())
    }
}

/// Format a page as a result line.
pub(crate) fn format_page(page: &Page) -> String {
    format!("{}\t{}\t{}\n", page.id, page.language, page.title)
}
