//! Insert tag error types.

/// No registered handler supports the tag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported insert tag: {tag}")]
pub struct UnsupportedTagError {
    /// Name of the unsupported tag.
    pub tag: String,
}

impl UnsupportedTagError {
    /// Create an error for the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}
