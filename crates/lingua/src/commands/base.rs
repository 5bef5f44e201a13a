//! `lingua base` command implementation.

use clap::Args;
use lingua_page::{Page, PageId};

use super::common::{CommonArgs, Session, format_page};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the base command.
#[derive(Args)]
pub(crate) struct BaseArgs {
    /// Page ID to resolve.
    page_id: u64,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl BaseArgs {
    /// Execute the base command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the page tree cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let session = self.common.open(None)?;

        match base_page(&session, PageId(self.page_id)) {
            Some(page) => output.result(&format_page(&page))?,
            None => output.warning(&format!("No base page for page {}", self.page_id)),
        }

        Ok(())
    }
}

fn base_page(session: &Session, id: PageId) -> Option<Page> {
    session.resolver().base_page(id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::common::tests::session;

    #[test]
    fn test_base_of_localized_page() {
        let (_temp_dir, session) = session("en");

        let page = base_page(&session, PageId(5)).unwrap();

        assert_eq!(page.id, PageId(2));
        assert_eq!(page.title, "About");
    }

    #[test]
    fn test_base_of_regular_page_is_itself() {
        let (_temp_dir, session) = session("en");

        assert_eq!(base_page(&session, PageId(2)).unwrap().id, PageId(2));
    }

    #[test]
    fn test_base_of_missing_page() {
        let (_temp_dir, session) = session("en");

        assert_eq!(base_page(&session, PageId(404)), None);
    }
}
