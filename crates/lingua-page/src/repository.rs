//! Repository trait and error types.
//!
//! Provides the core [`PageRepository`] trait for abstracting page lookup,
//! along with [`RepositoryError`] for unified error handling across backends.
//!
//! "Not found" is not an error: lookups return `Ok(None)` when no page
//! matches. [`RepositoryError`] is reserved for backend failures and
//! malformed trees.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::page::{Page, PageId};

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RepositoryErrorKind {
    /// A referenced page does not exist (e.g., a dangling `pid`).
    NotFound,
    /// Stored data is malformed (parse error, duplicate id, cyclic tree).
    InvalidData,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Other/unknown error category.
    Other,
}

/// Repository error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct RepositoryError {
    /// Semantic error category.
    pub kind: RepositoryErrorKind,
    /// Page context (if applicable).
    pub page_id: Option<PageId>,
    /// File context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Json", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RepositoryError {
    /// Create a new repository error.
    #[must_use]
    pub fn new(kind: RepositoryErrorKind) -> Self {
        Self {
            kind,
            page_id: None,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach page context.
    #[must_use]
    pub fn with_page_id(mut self, page_id: PageId) -> Self {
        self.page_id = Some(page_id);
        self
    }

    /// Attach file context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error for a referenced page.
    #[must_use]
    pub fn not_found(page_id: PageId) -> Self {
        Self::new(RepositoryErrorKind::NotFound).with_page_id(page_id)
    }

    /// Create an invalid data error with a message.
    #[must_use]
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::new(RepositoryErrorKind::InvalidData).with_source(Message(message.into()))
    }
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (page: 5) (path: pages.json)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            RepositoryErrorKind::NotFound => "Not found",
            RepositoryErrorKind::InvalidData => "Invalid data",
            RepositoryErrorKind::Unavailable => "Unavailable",
            RepositoryErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(page_id) = self.page_id {
            write!(f, " (page: {page_id})")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Plain message used as error source.
#[derive(Debug)]
struct Message(String);

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for Message {}

/// Conjunctive filter for [`PageRepository::find_one_where`].
///
/// A page matches when all four fields are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageFilter {
    /// Required `language_main`.
    pub language_main: PageId,
    /// Required page type.
    pub page_type: String,
    /// Required locale code.
    pub language: String,
    /// Required domain.
    pub dns: String,
}

impl PageFilter {
    /// Returns `true` if the page satisfies every condition.
    #[must_use]
    pub fn matches(&self, page: &Page) -> bool {
        page.language_main == self.language_main
            && page.page_type == self.page_type
            && page.language == self.language
            && page.dns == self.dns
    }
}

/// Page lookup abstraction.
///
/// Provides a unified interface for resolving pages regardless of backend.
/// Implementations return `Ok(None)` when nothing matches and reserve
/// `Err` for backend failures.
pub trait PageRepository: Send + Sync {
    /// Find a page by its id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backend fails.
    fn find_by_id(&self, id: PageId) -> Result<Option<Page>, RepositoryError>;

    /// Find a single page matching all conditions of `filter`.
    ///
    /// If several pages match, the first one in backend order is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the backend fails.
    fn find_one_where(&self, filter: &PageFilter) -> Result<Option<Page>, RepositoryError>;

    /// Load the full details of a page.
    ///
    /// The default implementation walks up the `pid` chain and fills in
    /// `root_id` with the nearest ancestor of type `root` (the page itself if
    /// it is a root). Pages outside any root keep `root_id` unset.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryErrorKind::NotFound`] for a dangling parent
    /// reference and [`RepositoryErrorKind::InvalidData`] for a cyclic tree.
    fn load_details(&self, page: &Page) -> Result<Page, RepositoryError> {
        let mut details = page.clone();

        if page.is_root() {
            details.root_id = Some(page.id);
            return Ok(details);
        }

        let mut visited = HashSet::from([page.id]);
        let mut parent_id = page.pid;

        while parent_id.is_set() {
            if !visited.insert(parent_id) {
                return Err(RepositoryError::invalid_data("cyclic page tree").with_page_id(page.id));
            }

            let parent = self
                .find_by_id(parent_id)?
                .ok_or_else(|| RepositoryError::not_found(parent_id))?;

            if parent.is_root() {
                details.root_id = Some(parent.id);
                return Ok(details);
            }
            parent_id = parent.pid;
        }

        tracing::debug!(page_id = %page.id, "Page has no root ancestor");
        Ok(details)
    }
}
