//! `lingua render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use lingua_insert_tags::handlers::PageTags;
use lingua_insert_tags::{InsertTagRegistry, replace_insert_tags};

use super::common::{CommonArgs, Session};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Text file containing insert tags (`-` reads stdin).
    file: PathBuf,

    /// Active locale (default: `i18n.default_locale` from config).
    #[arg(short, long)]
    locale: Option<String>,

    /// Render all tags as not cacheable.
    #[arg(long)]
    uncached: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or contains an
    /// unsupported insert tag.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let session = self.common.open(self.locale)?;
        let text = read_input(&self.file)?;

        let rendered = render(&session, &text, !self.uncached)?;
        output.result(&rendered)?;

        Ok(())
    }
}

/// Replace insert tags in `text` with a fresh registry.
fn render(session: &Session, text: &str, cacheable: bool) -> Result<String, CliError> {
    let mut registry =
        InsertTagRegistry::new().with_handler(PageTags::new(session.resolver(), session.context()));
    Ok(replace_insert_tags(&mut registry, text, cacheable)?)
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::common::tests::session;

    #[test]
    fn test_render_page_tags() {
        let (_temp_dir, session) = session("en");

        let output = render(
            &session,
            "<a href=\"/{{i18n_page_id::2}}\">{{i18n_page_title::2}}</a> ({{i18n_base_title::5}})",
            true,
        )
        .unwrap();

        assert_eq!(output, "<a href=\"/9\">About us</a> (About)");
    }

    #[test]
    fn test_render_unresolved_tag_is_empty() {
        let (_temp_dir, session) = session("en");

        let output = render(&session, "[{{i18n_page_title::404}}]", false).unwrap();

        assert_eq!(output, "[]");
    }

    #[test]
    fn test_render_unsupported_tag() {
        let (_temp_dir, session) = session("en");

        let err = render(&session, "{{date::Y}}", true).unwrap_err();

        assert!(matches!(err, CliError::UnsupportedTag(_)));
        assert_eq!(err.to_string(), "Unsupported insert tag: date");
    }

    #[test]
    fn test_read_input_file() {
        let (temp_dir, _session) = session("en");
        let path = temp_dir.path().join("page.html");
        fs::write(&path, "{{i18n_base_id::5}}").unwrap();

        assert_eq!(read_input(&path).unwrap(), "{{i18n_base_id::5}}");
    }

    #[test]
    fn test_read_input_missing_file() {
        let (temp_dir, _session) = session("en");

        let err = read_input(&temp_dir.path().join("missing.html")).unwrap_err();

        assert!(matches!(err, CliError::Io(_)));
    }
}
