//! `lingua translate` command implementation.

use clap::Args;
use lingua_page::{Page, PageId};

use super::common::{CommonArgs, Session, format_page};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the translate command.
#[derive(Args)]
pub(crate) struct TranslateArgs {
    /// Page ID to translate.
    page_id: u64,

    /// Active locale (default: `i18n.default_locale` from config).
    #[arg(short, long)]
    locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl TranslateArgs {
    /// Execute the translate command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the page tree cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let session = self.common.open(self.locale)?;

        match translated_page(&session, PageId(self.page_id)) {
            Some(page) => output.result(&format_page(&page))?,
            None => output.warning(&format!(
                "No translation of page {} for locale {}",
                self.page_id,
                session.context().active_locale
            )),
        }

        Ok(())
    }
}

fn translated_page(session: &Session, id: PageId) -> Option<Page> {
    session.resolver().translated_page(id, &session.context())
}
