//! Insert tag handler trait.

/// Handler for one or more insert tag names.
///
/// Every instance of a handler type supports the same, fixed set of tag
/// names. Matching is case-sensitive.
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each render gets its own
/// registry. Handlers may keep request-scoped state such as a resolver cache.
///
/// # Example
///
/// ```
/// use lingua_insert_tags::InsertTagHandler;
///
/// struct DateTag;
///
/// impl InsertTagHandler for DateTag {
///     fn supported_tags(&self) -> &'static [&'static str] {
///         &["date"]
///     }
///
///     fn parse(&mut self, _tag: &str, params: Option<&str>, _cacheable: bool) -> String {
///         match params {
///             Some("Y") => "2024".to_owned(),
///             _ => "2024-01-01".to_owned(),
///         }
///     }
/// }
///
/// assert!(DateTag.supports("date"));
/// assert!(!DateTag.supports("Date"));
/// ```
pub trait InsertTagHandler: Send {
    /// Tag names this handler renders.
    fn supported_tags(&self) -> &'static [&'static str];

    /// Returns `true` if `tag` is one of [`supported_tags`](Self::supported_tags).
    fn supports(&self, tag: &str) -> bool {
        self.supported_tags().contains(&tag)
    }

    /// Render a tag invocation.
    ///
    /// `tag` is one of the supported names and `params` the text after `::`,
    /// if any. `cacheable` tells whether the surrounding pipeline may cache
    /// the output; handlers with request-dependent output must account for it.
    fn parse(&mut self, tag: &str, params: Option<&str>, cacheable: bool) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Multi;

    impl InsertTagHandler for Multi {
        fn supported_tags(&self) -> &'static [&'static str] {
            &["a", "b_c"]
        }

        fn parse(&mut self, tag: &str, params: Option<&str>, _cacheable: bool) -> String {
            format!("{tag}:{}", params.unwrap_or("-"))
        }
    }

    #[test]
    fn test_supports_declared_tags() {
        assert!(Multi.supports("a"));
        assert!(Multi.supports("b_c"));
    }

    #[test]
    fn test_supports_is_case_sensitive() {
        assert!(!Multi.supports("A"));
        assert!(!Multi.supports("B_C"));
    }

    #[test]
    fn test_supports_rejects_unknown_and_partial() {
        assert!(!Multi.supports(""));
        assert!(!Multi.supports("b"));
        assert!(!Multi.supports("a "));
    }

    #[test]
    fn test_parse() {
        let mut handler = Multi;

        assert_eq!(handler.parse("a", Some("x"), true), "a:x");
        assert_eq!(handler.parse("b_c", None, false), "b_c:-");
    }
}
