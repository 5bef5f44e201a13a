//! Base and translated page resolution.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use lingua_page::{Page, PageFilter, PageId, PageRef, PageRepository, ROOT_PAGE_TYPE};

use crate::context::RenderContext;

/// Resolves localized pages to their base page or translated sibling.
///
/// All lookups fail soft: a missing page, a missing translation, or a
/// repository error yields `None`. Repository errors are logged.
///
/// # Caching
///
/// Base page lookups are cached per localized page id for the lifetime of the
/// resolver, including negative results. Failed lookups are not cached.
///
/// # Thread Safety
///
/// [`base_page`](Self::base_page) takes `&mut self` because it fills the
/// cache. To share a resolver between concurrent renders, wrap it in a
/// `Mutex`, or create one resolver per render.
pub struct LocalizationResolver {
    repository: Arc<dyn PageRepository>,
    localized_page_types: HashSet<String>,
    base_lookup_cache: HashMap<PageId, Option<Page>>,
}

impl LocalizationResolver {
    /// Create a resolver for the given localized page types.
    #[must_use]
    pub fn new<I, S>(repository: Arc<dyn PageRepository>, localized_page_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            repository,
            localized_page_types: localized_page_types.into_iter().map(Into::into).collect(),
            base_lookup_cache: HashMap::new(),
        }
    }

    /// Returns `true` if `page_type` denotes a localized page.
    #[must_use]
    pub fn is_localized_page(&self, page_type: &str) -> bool {
        self.localized_page_types.contains(page_type)
    }

    /// Get the base page of a page.
    ///
    /// Pages whose type is not localized are their own base page and are
    /// returned unchanged. For localized pages the page referenced by
    /// `language_main` is returned, or `None` if it does not exist.
    pub fn base_page<'a>(&mut self, page: impl Into<PageRef<'a>>) -> Option<Page> {
        let page = self.resolve(page.into())?;

        if !self.is_localized_page(&page.page_type) {
            return Some(page);
        }

        if let Some(cached) = self.base_lookup_cache.get(&page.id) {
            return cached.clone();
        }

        let base = self.find_by_id(page.language_main)?;
        tracing::debug!(
            page_id = %page.id,
            language_main = %page.language_main,
            found = base.is_some(),
            "Resolved base page"
        );
        self.base_lookup_cache.insert(page.id, base.clone());

        base
    }

    /// Get the variant of a page for the active locale.
    ///
    /// Returns the page itself if it is already in the active locale. Otherwise
    /// the translation is looked up below the page's root, which must be a
    /// fallback root: outside a fallback tree there is no way to tell which
    /// page is the translation, so `None` is returned.
    pub fn translated_page<'a>(
        &self,
        page: impl Into<PageRef<'a>>,
        ctx: &RenderContext,
    ) -> Option<Page> {
        let page = self.resolve(page.into())?;

        if page.language == ctx.active_locale {
            return Some(page);
        }

        let root = self.root_page(&page)?;

        if !root.fallback {
            tracing::debug!(
                page_id = %page.id,
                root_id = %root.id,
                "Root is not a fallback root, no translation lookup"
            );
            return None;
        }

        let filter = PageFilter {
            language_main: page.id,
            page_type: ROOT_PAGE_TYPE.to_owned(),
            language: root.language,
            dns: root.dns,
        };

        match self.repository.find_one_where(&filter) {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(page_id = %page.id, error = %e, "Failed to look up translated page");
                None
            }
        }
    }

    /// Drop all cached base page lookups.
    pub fn clear_cache(&mut self) {
        self.base_lookup_cache.clear();
    }

    /// Number of cached base page lookups.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.base_lookup_cache.len()
    }

    fn resolve(&self, page: PageRef<'_>) -> Option<Page> {
        match page {
            PageRef::Page(page) => Some(page.clone()),
            PageRef::Id(id) => self.find_by_id(id).flatten(),
        }
    }

    fn root_page(&self, page: &Page) -> Option<Page> {
        let root_id = match page.root_id {
            Some(root_id) if root_id.is_set() => root_id,
            _ => match self.repository.load_details(page) {
                Ok(details) => details.root_id?,
                Err(e) => {
                    tracing::warn!(page_id = %page.id, error = %e, "Failed to load page details");
                    return None;
                }
            },
        };

        self.find_by_id(root_id).flatten()
    }

    /// Look up a page. The outer `None` means the repository failed.
    fn find_by_id(&self, id: PageId) -> Option<Option<Page>> {
        self.repository
            .find_by_id(id)
            .inspect_err(|e| tracing::warn!(page_id = %id, error = %e, "Failed to look up page"))
            .ok()
    }
}
