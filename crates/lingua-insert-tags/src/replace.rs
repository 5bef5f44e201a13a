//! Insert tag replacement in text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::UnsupportedTagError;
use crate::registry::InsertTagRegistry;
use crate::tag::InsertTag;

/// Matches `{{...}}` tokens without nested braces.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("invalid insert tag regex"));

/// Replace every insert tag token in `text` with its rendered output.
///
/// A tag is rendered as cacheable only if `cacheable` is `true` and the tag
/// has no `uncached` flag. Tokens with an empty name (e.g., `{{}}`) are left
/// as they are.
///
/// # Errors
///
/// Returns [`UnsupportedTagError`] for the first tag no handler supports.
/// No partial output is returned.
pub fn replace_insert_tags(
    registry: &mut InsertTagRegistry,
    text: &str,
    cacheable: bool,
) -> Result<String, UnsupportedTagError> {
    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;

    for captures in TAG_PATTERN.captures_iter(text) {
        let (Some(token), Some(body)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let Some(tag) = InsertTag::parse(body.as_str()) else {
            continue;
        };

        let rendered = registry.dispatch(
            &tag.name,
            tag.params.as_deref(),
            cacheable && tag.cacheable,
        )?;

        output.push_str(&text[last_end..token.start()]);
        output.push_str(&rendered);
        last_end = token.end();
    }

    output.push_str(&text[last_end..]);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::handler::InsertTagHandler;

    struct Echo;

    impl InsertTagHandler for Echo {
        fn supported_tags(&self) -> &'static [&'static str] {
            &["echo"]
        }

        fn parse(&mut self, _tag: &str, params: Option<&str>, cacheable: bool) -> String {
            let params = params.unwrap_or_default();
            if cacheable {
                params.to_owned()
            } else {
                format!("{params}!")
            }
        }
    }

    fn registry() -> InsertTagRegistry {
        InsertTagRegistry::new().with_handler(Echo)
    }

    #[test]
    fn test_text_without_tags_unchanged() {
        let text = "Plain text with { braces } and }} stray {{ markers";

        assert_eq!(replace_insert_tags(&mut registry(), text, true).unwrap(), text);
    }

    #[test]
    fn test_replace_single_tag() {
        let output = replace_insert_tags(&mut registry(), "a {{echo::b}} c", true).unwrap();

        assert_eq!(output, "a b c");
    }

    #[test]
    fn test_replace_multiple_tags() {
        let output =
            replace_insert_tags(&mut registry(), "{{echo::1}}{{echo::2}} {{echo}}", true).unwrap();

        assert_eq!(output, "12 ");
    }

    #[test]
    fn test_uncached_flag_disables_caching() {
        let output =
            replace_insert_tags(&mut registry(), "{{echo::x|uncached}} {{echo::y}}", true)
                .unwrap();

        assert_eq!(output, "x! y");
    }

    #[test]
    fn test_non_cacheable_render() {
        let output = replace_insert_tags(&mut registry(), "{{echo::x}}", false).unwrap();

        assert_eq!(output, "x!");
    }

    #[test]
    fn test_empty_token_left_unchanged() {
        let output = replace_insert_tags(&mut registry(), "{{}} {{echo::x}}", true).unwrap();

        assert_eq!(output, "{{}} x");
    }

    #[test]
    fn test_unsupported_tag_fails() {
        let err =
            replace_insert_tags(&mut registry(), "{{echo::x}} {{unknown::1}}", true).unwrap_err();

        assert_eq!(err.tag, "unknown");
    }

    #[test]
    fn test_nested_braces_match_inner_token() {
        let output = replace_insert_tags(&mut registry(), "{{{{echo::x}}}}", true).unwrap();

        assert_eq!(output, "{{x}}");
    }

    #[test]
    fn test_unicode_around_tags() {
        let output = replace_insert_tags(&mut registry(), "Grüße {{echo::Welt}} ✓", true).unwrap();

        assert_eq!(output, "Grüße Welt ✓");
    }
}
