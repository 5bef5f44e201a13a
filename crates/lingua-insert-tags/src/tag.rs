//! Insert tag invocation parsing.

/// Flag marking a tag's output as not cacheable.
const UNCACHED_FLAG: &str = "uncached";

/// A parsed insert tag invocation.
///
/// Parsed from the body of a `{{...}}` token with the syntax
/// `name[::params][|flag...]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertTag {
    /// Tag name.
    pub name: String,
    /// Everything after the first `::`, if present.
    pub params: Option<String>,
    /// Flags after `|`, in order.
    pub flags: Vec<String>,
    /// Whether the output may be cached (`false` with the `uncached` flag).
    pub cacheable: bool,
}

impl InsertTag {
    /// Create a cacheable tag invocation without params or flags.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
            flags: Vec::new(),
            cacheable: true,
        }
    }

    /// Set the params.
    #[must_use]
    pub fn with_params(mut self, params: impl Into<String>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Parse a tag body such as `i18n_page_title::42|uncached`.
    ///
    /// Returns `None` if the name is empty.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split('|');
        let body = parts.next().unwrap_or_default();
        let flags: Vec<String> = parts
            .map(str::trim)
            .filter(|flag| !flag.is_empty())
            .map(str::to_owned)
            .collect();

        let (name, params) = match body.split_once("::") {
            Some((name, params)) => (name, Some(params.to_owned())),
            None => (body, None),
        };
        let name = name.trim();

        if name.is_empty() {
            return None;
        }

        let cacheable = !flags.iter().any(|flag| flag == UNCACHED_FLAG);

        Some(Self {
            name: name.to_owned(),
            params,
            flags,
            cacheable,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_name_only() {
        let tag = InsertTag::parse("date").unwrap();

        assert_eq!(tag, InsertTag::new("date"));
    }

    #[test]
    fn test_parse_with_params() {
        let tag = InsertTag::parse("i18n_page_title::42").unwrap();

        assert_eq!(tag.name, "i18n_page_title");
        assert_eq!(tag.params.as_deref(), Some("42"));
        assert!(tag.cacheable);
    }

    #[test]
    fn test_parse_params_keep_inner_separators() {
        let tag = InsertTag::parse("link::a::b").unwrap();

        assert_eq!(tag.name, "link");
        assert_eq!(tag.params.as_deref(), Some("a::b"));
    }

    #[test]
    fn test_parse_empty_params() {
        let tag = InsertTag::parse("link::").unwrap();

        assert_eq!(tag.params.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_uncached_flag() {
        let tag = InsertTag::parse("i18n_page_id::7|uncached").unwrap();

        assert_eq!(tag.params.as_deref(), Some("7"));
        assert_eq!(tag.flags, vec!["uncached".to_owned()]);
        assert!(!tag.cacheable);
    }

    #[test]
    fn test_parse_other_flags_keep_cacheable() {
        let tag = InsertTag::parse("title|strtoupper| |standardize").unwrap();

        assert_eq!(tag.name, "title");
        assert_eq!(
            tag.flags,
            vec!["strtoupper".to_owned(), "standardize".to_owned()]
        );
        assert!(tag.cacheable);
    }

    #[test]
    fn test_parse_empty_name() {
        assert_eq!(InsertTag::parse(""), None);
        assert_eq!(InsertTag::parse("  "), None);
        assert_eq!(InsertTag::parse("::42"), None);
        assert_eq!(InsertTag::parse("|uncached"), None);
    }

    #[test]
    fn test_with_params() {
        let tag = InsertTag::new("a").with_params("1");

        assert_eq!(tag.params.as_deref(), Some("1"));
    }
}
