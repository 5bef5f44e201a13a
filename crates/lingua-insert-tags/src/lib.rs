//! Pluggable insert tags for Lingua.
//!
//! Insert tags are placeholders in rendered text, written as
//! `{{name::params|flags}}`, that are replaced at render time by the output of
//! a handler.
//!
//! # Architecture
//!
//! - [`InsertTagHandler`]: trait implemented by each handler; declares a fixed
//!   set of tag names and renders an invocation to text
//! - [`InsertTagRegistry`]: ordered set of handlers; [`dispatch`](InsertTagRegistry::dispatch)
//!   routes a tag to the first handler supporting it
//! - [`InsertTag`]: a parsed tag invocation
//! - [`replace_insert_tags`]: replaces every tag token in a text
//!
//! Unknown tags are never dropped silently: dispatch fails with
//! [`UnsupportedTagError`].
//!
//! # Example
//!
//! ```
//! use lingua_insert_tags::{InsertTagHandler, InsertTagRegistry, replace_insert_tags};
//!
//! struct UpperTag;
//!
//! impl InsertTagHandler for UpperTag {
//!     fn supported_tags(&self) -> &'static [&'static str] {
//!         &["upper"]
//!     }
//!
//!     fn parse(&mut self, _tag: &str, params: Option<&str>, _cacheable: bool) -> String {
//!         params.unwrap_or_default().to_uppercase()
//!     }
//! }
//!
//! let mut registry = InsertTagRegistry::new().with_handler(UpperTag);
//!
//! let output = replace_insert_tags(&mut registry, "Hello {{upper::world}}!", true).unwrap();
//! assert_eq!(output, "Hello WORLD!");
//! ```

mod error;
mod handler;
pub mod handlers;
mod registry;
mod replace;
mod tag;

pub use error::UnsupportedTagError;
pub use handler::InsertTagHandler;
pub use registry::InsertTagRegistry;
pub use replace::replace_insert_tags;
pub use tag::InsertTag;
