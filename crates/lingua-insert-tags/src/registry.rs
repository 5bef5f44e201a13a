//! Insert tag registry and dispatch.

use crate::error::UnsupportedTagError;
use crate::handler::InsertTagHandler;
use crate::tag::InsertTag;

/// Ordered set of insert tag handlers.
///
/// Dispatch scans handlers in registration order and uses the first one that
/// supports the tag. When two handlers declare the same tag name, the one
/// registered first always wins.
#[derive(Default)]
pub struct InsertTagRegistry {
    handlers: Vec<Box<dyn InsertTagHandler>>,
}

impl InsertTagRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler after all previously registered ones.
    #[must_use]
    pub fn with_handler<H: InsertTagHandler + 'static>(mut self, handler: H) -> Self {
        self.register(handler);
        self
    }

    /// Register a handler after all previously registered ones.
    pub fn register<H: InsertTagHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    /// Returns `true` if any registered handler supports `tag`.
    #[must_use]
    pub fn supports(&self, tag: &str) -> bool {
        self.handlers.iter().any(|handler| handler.supports(tag))
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Render a tag with the first handler supporting it.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedTagError`] if no registered handler supports `tag`.
    pub fn dispatch(
        &mut self,
        tag: &str,
        params: Option<&str>,
        cacheable: bool,
    ) -> Result<String, UnsupportedTagError> {
        let Some(handler) = self
            .handlers
            .iter_mut()
            .find(|handler| handler.supports(tag))
        else {
            tracing::warn!(tag, "No handler for insert tag");
            return Err(UnsupportedTagError::new(tag));
        };

        Ok(handler.parse(tag, params, cacheable))
    }

    /// Render a parsed tag invocation.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedTagError`] if no registered handler supports the tag.
    pub fn dispatch_tag(&mut self, tag: &InsertTag) -> Result<String, UnsupportedTagError> {
        self.dispatch(&tag.name, tag.params.as_deref(), tag.cacheable)
    }
}
