//! Rendering context passed to resolver calls.

/// Per-render ambient values.
///
/// Created by the caller for each render and passed into
/// [`LocalizationResolver::translated_page`](crate::LocalizationResolver::translated_page).
/// The resolver never stores it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderContext {
    /// Locale code of the page being rendered (e.g., "en").
    pub active_locale: String,
}

impl RenderContext {
    /// Create a context for the given active locale.
    #[must_use]
    pub fn new(active_locale: impl Into<String>) -> Self {
        Self {
            active_locale: active_locale.into(),
        }
    }
}
