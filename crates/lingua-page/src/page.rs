//! Page record and identifiers.
//!
//! A [`Page`] is a node in a site tree. Tree roots carry site-wide settings
//! (`language`, `dns`, `fallback`); regular pages point to their parent via
//! `pid` and, when they are language variants, to their base page via
//! `language_main`.

use std::fmt;

use serde::Deserialize;

/// Page type of tree root pages.
pub const ROOT_PAGE_TYPE: &str = "root";

/// Unique page identifier.
///
/// `PageId(0)` is the "absent" id used for unset `pid`, `language_main`
/// and similar references.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl PageId {
    /// Returns `true` unless this is the absent id (`0`).
    #[must_use]
    pub fn is_set(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A page in the site tree.
///
/// Deserialized from camelCase JSON (`languageMain`, `rootId`, `type`).
/// Missing optional keys take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    /// Unique page identifier.
    pub id: PageId,
    /// Parent page id (`0` for tree roots).
    pub pid: PageId,
    /// Page type (e.g., "root", "regular", "`i18n_regular`").
    #[serde(rename = "type")]
    pub page_type: String,
    /// Page title.
    pub title: String,
    /// Locale code (e.g., "en", "de").
    pub language: String,
    /// Base page this localized page derives from (`0` for base pages).
    pub language_main: PageId,
    /// Tree root id. `None` until the page details are loaded.
    pub root_id: Option<PageId>,
    /// Root-level flag: this root's language is the fallback of the site.
    pub fallback: bool,
    /// Domain scoping the tree.
    pub dns: String,
}

impl Page {
    /// Create a page with the given id and type, all other fields defaulted.
    #[must_use]
    pub fn new(id: u64, page_type: impl Into<String>) -> Self {
        Self {
            id: PageId(id),
            page_type: page_type.into(),
            ..Self::default()
        }
    }

    /// Set the parent page id.
    #[must_use]
    pub fn with_pid(mut self, pid: u64) -> Self {
        self.pid = PageId(pid);
        self
    }

    /// Set the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the locale code.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the base page id.
    #[must_use]
    pub fn with_language_main(mut self, language_main: u64) -> Self {
        self.language_main = PageId(language_main);
        self
    }

    /// Set the tree root id.
    #[must_use]
    pub fn with_root_id(mut self, root_id: u64) -> Self {
        self.root_id = Some(PageId(root_id));
        self
    }

    /// Set the fallback flag.
    #[must_use]
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the domain.
    #[must_use]
    pub fn with_dns(mut self, dns: impl Into<String>) -> Self {
        self.dns = dns.into();
        self
    }

    /// Returns `true` if this page is a tree root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.page_type == ROOT_PAGE_TYPE
    }
}

/// Reference to a page, either by id or as an already loaded record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRef<'a> {
    /// Page id to be looked up in the repository.
    Id(PageId),
    /// Loaded page record.
    Page(&'a Page),
}

impl From<PageId> for PageRef<'_> {
    fn from(id: PageId) -> Self {
        Self::Id(id)
    }
}

impl From<u64> for PageRef<'_> {
    fn from(id: u64) -> Self {
        Self::Id(PageId(id))
    }
}

impl<'a> From<&'a Page> for PageRef<'a> {
    fn from(page: &'a Page) -> Self {
        Self::Page(page)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_page_id_is_set() {
        assert!(!PageId(0).is_set());
        assert!(PageId(1).is_set());
        assert!(!PageId::default().is_set());
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(PageId(42).to_string(), "42");
    }

    #[test]
    fn test_page_builder() {
        let page = Page::new(5, "i18n_regular")
            .with_pid(2)
            .with_title("Über uns")
            .with_language("de")
            .with_language_main(1)
            .with_dns("example.de");

        assert_eq!(page.id, PageId(5));
        assert_eq!(page.pid, PageId(2));
        assert_eq!(page.page_type, "i18n_regular");
        assert_eq!(page.title, "Über uns");
        assert_eq!(page.language, "de");
        assert_eq!(page.language_main, PageId(1));
        assert_eq!(page.root_id, None);
        assert!(!page.fallback);
        assert_eq!(page.dns, "example.de");
    }

    #[test]
    fn test_is_root() {
        assert!(Page::new(1, "root").is_root());
        assert!(!Page::new(2, "regular").is_root());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 5,
            "pid": 2,
            "type": "i18n_regular",
            "title": "About",
            "language": "en",
            "languageMain": 1,
            "rootId": 2,
            "dns": "example.com"
        }"#;

        let page: Page = serde_json::from_str(json).unwrap();

        assert_eq!(
            page,
            Page::new(5, "i18n_regular")
                .with_pid(2)
                .with_title("About")
                .with_language("en")
                .with_language_main(1)
                .with_root_id(2)
                .with_dns("example.com")
        );
    }

    #[test]
    fn test_deserialize_defaults_missing_keys() {
        let page: Page = serde_json::from_str(r#"{"id": 3, "type": "root", "fallback": true}"#)
            .unwrap();

        assert_eq!(page.pid, PageId(0));
        assert_eq!(page.language_main, PageId(0));
        assert_eq!(page.root_id, None);
        assert!(page.fallback);
        assert!(page.dns.is_empty());
    }

    #[test]
    fn test_page_ref_conversions() {
        let page = Page::new(7, "regular");

        assert_eq!(PageRef::from(PageId(7)), PageRef::Id(PageId(7)));
        assert_eq!(PageRef::from(&page), PageRef::Page(&page));
    }
}
