//! Page model and repository abstraction for Lingua.
//!
//! This crate provides the [`Page`] record shared by the localization resolver
//! and the insert-tag handlers, and a [`PageRepository`] trait abstracting page
//! lookup from the underlying persistence layer. This enables:
//!
//! - **Unit testing** without a real page store
//! - **Backend flexibility** (JSON file, SQL database, remote CMS)
//! - **Clean separation** between localization logic and I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`PageRepository`] trait with `find_by_id()`, `find_one_where()` and `load_details()`
//! - [`JsonRepository`] loading a page tree from a JSON file into memory
//! - [`MockRepository`] with lookup counters for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use lingua_page::{JsonRepository, PageId, PageRepository};
//!
//! let repository = JsonRepository::from_path("pages.json")?;
//! if let Some(page) = repository.find_by_id(PageId(5))? {
//!     println!("{}: {}", page.id, page.title);
//! }
//! ```

mod json;
#[cfg(feature = "mock")]
mod mock;
mod page;
mod repository;

pub use json::JsonRepository;
#[cfg(feature = "mock")]
pub use mock::MockRepository;
pub use page::{Page, PageId, PageRef, ROOT_PAGE_TYPE};
pub use repository::{PageFilter, PageRepository, RepositoryError, RepositoryErrorKind};
