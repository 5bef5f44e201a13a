//! Built-in insert tag handlers.

mod page;

pub use page::PageTags;
