//! Page localization for Lingua.
//!
//! A site consists of one page tree per language. Language variants of a page
//! are *localized pages*: their type is one of a configured set (e.g.
//! `i18n_regular`) and their `language_main` points to the *base page* they
//! derive from.
//!
//! [`LocalizationResolver`] answers two questions:
//!
//! - [`base_page`](LocalizationResolver::base_page): which page does this one
//!   derive from? Results are cached for the resolver's lifetime.
//! - [`translated_page`](LocalizationResolver::translated_page): which page is
//!   the variant of this one for the active locale? Only answered inside a
//!   fallback tree.
//!
//! The active locale is passed explicitly through a [`RenderContext`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lingua_i18n::LocalizationResolver;
//! use lingua_page::{JsonRepository, PageId};
//!
//! let repository = JsonRepository::from_json(r#"[
//!     { "id": 1, "type": "regular", "title": "About" },
//!     { "id": 5, "type": "i18n_regular", "languageMain": 1 }
//! ]"#).unwrap();
//!
//! let mut resolver = LocalizationResolver::new(Arc::new(repository), ["i18n_regular"]);
//!
//! let base = resolver.base_page(PageId(5)).unwrap();
//! assert_eq!(base.title, "About");
//! ```

mod context;
mod resolver;

pub use context::RenderContext;
pub use resolver::LocalizationResolver;
