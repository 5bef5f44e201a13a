//! Page localization insert tags.
//!
//! Exposes [`LocalizationResolver`] lookups to rendered text:
//!
//! | Tag | Output |
//! |---|---|
//! | `{{i18n_base_id::<id>}}` | id of the base page |
//! | `{{i18n_base_title::<id>}}` | title of the base page |
//! | `{{i18n_page_id::<id>}}` | id of the translated page for the active locale |
//! | `{{i18n_page_title::<id>}}` | title of the translated page for the active locale |
//!
//! Tags render as empty text when the page cannot be resolved.

use lingua_i18n::{LocalizationResolver, RenderContext};
use lingua_page::{Page, PageId};

use crate::handler::InsertTagHandler;

const BASE_ID: &str = "i18n_base_id";
const BASE_TITLE: &str = "i18n_base_title";
const PAGE_ID: &str = "i18n_page_id";
const PAGE_TITLE: &str = "i18n_page_title";

/// Insert tags resolving base and translated pages.
///
/// Owns the resolver for the duration of a render, so base page lookups are
/// cached across all tags of that render.
pub struct PageTags {
    resolver: LocalizationResolver,
    ctx: RenderContext,
}

impl PageTags {
    /// Create the handler for a render in the given context.
    #[must_use]
    pub fn new(resolver: LocalizationResolver, ctx: RenderContext) -> Self {
        Self { resolver, ctx }
    }

    /// Give back the resolver, keeping its cache.
    #[must_use]
    pub fn into_resolver(self) -> LocalizationResolver {
        self.resolver
    }

    fn lookup(&mut self, tag: &str, id: PageId) -> Option<Page> {
        match tag {
            BASE_ID | BASE_TITLE => self.resolver.base_page(id),
            _ => self.resolver.translated_page(id, &self.ctx),
        }
    }
}

impl InsertTagHandler for PageTags {
    fn supported_tags(&self) -> &'static [&'static str] {
        &[BASE_ID, BASE_TITLE, PAGE_ID, PAGE_TITLE]
    }

    fn parse(&mut self, tag: &str, params: Option<&str>, _cacheable: bool) -> String {
        let Some(id) = params.and_then(|p| p.trim().parse::<u64>().ok()) else {
            tracing::debug!(tag, params, "Insert tag needs a numeric page id");
            return String::new();
        };

        let Some(page) = self.lookup(tag, PageId(id)) else {
            return String::new();
        };

        match tag {
            BASE_TITLE | PAGE_TITLE => page.title,
            _ => page.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lingua_page::{MockRepository, PageRepository};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{InsertTagRegistry, replace_insert_tags};

    fn repository() -> Arc<MockRepository> {
        Arc::new(
            MockRepository::new()
                .with_page(
                    Page::new(1, "root")
                        .with_language("en")
                        .with_dns("example.com")
                        .with_fallback(true),
                )
                .with_page(
                    Page::new(2, "regular")
                        .with_pid(1)
                        .with_title("About")
                        .with_language("de"),
                )
                .with_page(
                    Page::new(5, "i18n_regular")
                        .with_pid(1)
                        .with_title("Über uns")
                        .with_language_main(2),
                )
                .with_page(
                    Page::new(9, "root")
                        .with_language_main(2)
                        .with_title("About us")
                        .with_language("en")
                        .with_dns("example.com"),
                ),
        )
    }

    fn handler(repository: &Arc<MockRepository>, locale: &str) -> PageTags {
        let resolver = LocalizationResolver::new(
            Arc::clone(repository) as Arc<dyn PageRepository>,
            ["i18n_regular"],
        );
        PageTags::new(resolver, RenderContext::new(locale))
    }

    #[test]
    fn test_supported_tags() {
        let repository = repository();
        let tags = handler(&repository, "en");

        assert!(tags.supports("i18n_base_id"));
        assert!(tags.supports("i18n_base_title"));
        assert!(tags.supports("i18n_page_id"));
        assert!(tags.supports("i18n_page_title"));
        assert!(!tags.supports("i18n_page"));
    }

    #[test]
    fn test_base_tags() {
        let repository = repository();
        let mut tags = handler(&repository, "en");

        assert_eq!(tags.parse("i18n_base_id", Some("5"), true), "2");
        assert_eq!(tags.parse("i18n_base_title", Some("5"), true), "About");
        assert_eq!(tags.parse("i18n_base_title", Some("2"), true), "About");
    }

    #[test]
    fn test_base_lookup_cached_across_tags() {
        let repository = repository();
        let mut tags = handler(&repository, "en");

        tags.parse("i18n_base_id", Some("5"), true);
        tags.parse("i18n_base_title", Some("5"), true);

        // Two input lookups, one base lookup
        assert_eq!(repository.find_by_id_calls(), 3);
        assert_eq!(tags.into_resolver().cached_len(), 1);
    }

    #[test]
    fn test_page_tags_translate() {
        let repository = repository();
        let mut tags = handler(&repository, "en-US");

        assert_eq!(tags.parse("i18n_page_id", Some("2"), true), "9");
        assert_eq!(tags.parse("i18n_page_title", Some("2"), true), "About us");
    }

    #[test]
    fn test_page_tags_same_locale() {
        let repository = repository();
        let mut tags = handler(&repository, "de");

        assert_eq!(tags.parse("i18n_page_title", Some("2"), true), "About");
    }

    #[test]
    fn test_unresolvable_renders_empty() {
        let repository = repository();
        let mut tags = handler(&repository, "en");

        assert_eq!(tags.parse("i18n_page_id", Some("404"), true), "");
        assert_eq!(tags.parse("i18n_base_id", Some("404"), true), "");
    }

    #[test]
    fn test_invalid_params_render_empty() {
        let repository = repository();
        let mut tags = handler(&repository, "en");

        assert_eq!(tags.parse("i18n_base_id", None, true), "");
        assert_eq!(tags.parse("i18n_base_id", Some("abc"), true), "");
        assert_eq!(tags.parse("i18n_base_id", Some("-1"), true), "");
        assert_eq!(repository.lookups(), 0);
    }

    #[test]
    fn test_params_trimmed() {
        let repository = repository();
        let mut tags = handler(&repository, "en");

        assert_eq!(tags.parse("i18n_base_id", Some(" 5 "), true), "2");
    }

    #[test]
    fn test_in_registry_pipeline() {
        let repository = repository();
        let mut registry = InsertTagRegistry::new().with_handler(handler(&repository, "en"));

        let output = replace_insert_tags(
            &mut registry,
            "<a href=\"/{{i18n_page_id::2}}\">{{i18n_page_title::2|uncached}}</a>",
            true,
        )
        .unwrap();

        assert_eq!(output, "<a href=\"/9\">About us</a>");
    }
}
