//! JSON file repository implementation.
//!
//! Provides [`JsonRepository`] for loading a page tree from a JSON file
//! into memory. The file holds an array of page objects:
//!
//! ```json
//! [
//!   { "id": 1, "type": "root", "language": "en", "dns": "example.com", "fallback": true },
//!   { "id": 2, "pid": 1, "type": "regular", "title": "About" },
//!   { "id": 5, "pid": 3, "type": "i18n_regular", "languageMain": 2, "language": "de" }
//! ]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::page::{Page, PageId};
use crate::repository::{PageFilter, PageRepository, RepositoryError, RepositoryErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Json";

/// In-memory page repository loaded from JSON.
///
/// Pages keep their file order; [`find_one_where`](PageRepository::find_one_where)
/// returns the first match in that order.
#[derive(Debug)]
pub struct JsonRepository {
    pages: Vec<Page>,
    index: HashMap<PageId, usize>,
    source: Option<PathBuf>,
}

impl JsonRepository {
    /// Load pages from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the file cannot be read, is not a valid
    /// page array, or contains duplicate ids.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            let kind = match e.kind() {
                std::io::ErrorKind::NotFound => RepositoryErrorKind::NotFound,
                _ => RepositoryErrorKind::Unavailable,
            };
            RepositoryError::new(kind)
                .with_backend(BACKEND)
                .with_path(path)
                .with_source(e)
        })?;

        let mut repository = Self::from_json(&content).map_err(|e| e.with_path(path))?;
        repository.source = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            page_count = repository.len(),
            "Loaded page tree"
        );

        Ok(repository)
    }

    /// Parse pages from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the input is not a valid page array or
    /// contains duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        let pages: Vec<Page> = serde_json::from_str(json).map_err(|e| {
            RepositoryError::new(RepositoryErrorKind::InvalidData)
                .with_backend(BACKEND)
                .with_source(e)
        })?;
        Self::from_pages(pages)
    }

    /// Build a repository from already loaded pages.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryErrorKind::InvalidData`] if two pages share an id.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self, RepositoryError> {
        let mut index = HashMap::with_capacity(pages.len());

        for (position, page) in pages.iter().enumerate() {
            if index.insert(page.id, position).is_some() {
                return Err(RepositoryError::invalid_data("duplicate page id")
                    .with_backend(BACKEND)
                    .with_page_id(page.id));
            }
        }

        Ok(Self {
            pages,
            index,
            source: None,
        })
    }

    /// Path of the file the pages were loaded from.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the repository holds no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageRepository for JsonRepository {
    fn find_by_id(&self, id: PageId) -> Result<Option<Page>, RepositoryError> {
        Ok(self.index.get(&id).map(|&position| self.pages[position].clone()))
    }

    fn find_one_where(&self, filter: &PageFilter) -> Result<Option<Page>, RepositoryError> {
        Ok(self.pages.iter().find(|page| filter.matches(page)).cloned())
    }
}
