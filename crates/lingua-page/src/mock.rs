//! Mock repository implementation for testing.
//!
//! Provides [`MockRepository`] for unit testing without a page store.
//! Every lookup is counted so tests can assert how often the repository
//! was hit.

use std::collections::HashSet;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::page::{Page, PageId};
use crate::repository::{PageFilter, PageRepository, RepositoryError, RepositoryErrorKind};

/// Mock repository for testing.
///
/// Stores pages in memory in insertion order. Use the builder methods
/// to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use lingua_page::{MockRepository, Page, PageId, PageRepository};
///
/// let repository = MockRepository::new()
///     .with_page(Page::new(1, "regular"))
///     .with_page(Page::new(5, "i18n_regular").with_language_main(1));
///
/// let page = repository.find_by_id(PageId(5)).unwrap();
/// assert_eq!(repository.find_by_id_calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockRepository {
    pages: RwLock<Vec<Page>>,
    failing: RwLock<HashSet<PageId>>,
    find_by_id_calls: AtomicUsize,
    find_one_calls: AtomicUsize,
}

impl MockRepository {
    /// Create a new empty mock repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, page: Page) -> Self {
        self.pages.write().unwrap().push(page);
        self
    }

    /// Make lookups of `id` fail with [`RepositoryErrorKind::Unavailable`].
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, id: PageId) -> Self {
        self.failing.write().unwrap().insert(id);
        self
    }

    /// Stop failing lookups of `id`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn recover(&self, id: PageId) {
        self.failing.write().unwrap().remove(&id);
    }

    /// Number of `find_by_id` calls so far.
    pub fn find_by_id_calls(&self) -> usize {
        self.find_by_id_calls.load(Ordering::SeqCst)
    }

    /// Number of `find_one_where` calls so far.
    pub fn find_one_calls(&self) -> usize {
        self.find_one_calls.load(Ordering::SeqCst)
    }

    /// Total number of repository lookups so far.
    pub fn lookups(&self) -> usize {
        self.find_by_id_calls() + self.find_one_calls()
    }

    /// Reset all call counters.
    pub fn reset_counters(&self) {
        self.find_by_id_calls.store(0, Ordering::SeqCst);
        self.find_one_calls.store(0, Ordering::SeqCst);
    }
}

impl PageRepository for MockRepository {
    fn find_by_id(&self, id: PageId) -> Result<Option<Page>, RepositoryError> {
        self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.read().unwrap().contains(&id) {
            return Err(RepositoryError::new(RepositoryErrorKind::Unavailable)
                .with_backend("Mock")
                .with_page_id(id));
        }

        Ok(self
            .pages
            .read()
            .unwrap()
            .iter()
            .find(|page| page.id == id)
            .cloned())
    }

    fn find_one_where(&self, filter: &PageFilter) -> Result<Option<Page>, RepositoryError> {
        self.find_one_calls.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .pages
            .read()
            .unwrap()
            .iter()
            .find(|page| filter.matches(page))
            .cloned())
    }
}
