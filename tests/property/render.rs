//! Renderer invariants.

use proptest::prelude::*;
use scour::{escape_html, render_markup, snippet, IndexEntry, ELLIPSIS, EXCERPT_CHARS};

proptest! {
    #[test]
    fn escaped_text_has_no_markup_characters(text in ".{0,64}") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn escaping_is_reversible(text in ".{0,64}") {
        let unescaped = escape_html(&text)
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");
        prop_assert_eq!(unescaped, text);
    }

    #[test]
    fn rendered_fields_cannot_open_tags(title in ".{0,32}", body in ".{0,200}", url in ".{0,32}") {
        let entry = IndexEntry { title, body, url, ..Default::default() };
        let html = render_markup(&[&entry]);
        // The only tags are the ones the renderer writes itself
        prop_assert_eq!(html.matches('<').count(), 6);
    }

    #[test]
    fn excerpt_length_is_bounded(body in ".{0,300}") {
        let entry = IndexEntry { body: body.clone(), ..Default::default() };
        let snip = snippet(&entry);
        prop_assert!(snip.ends_with(ELLIPSIS));
        let kept = snip.chars().count() - ELLIPSIS.len();
        prop_assert_eq!(kept, body.chars().count().min(EXCERPT_CHARS));
    }
}
