//! What ends up in the results container.

use super::common::{corpus_with, loaded_widget, make_entry, RecordingView};
use scour::{render_markup, search, SearchWidget, EXCERPT_CHARS, NO_RESULTS_MARKUP};

#[test]
fn rust_guide_markup() {
    let mut widget = loaded_widget();
    widget.on_input("ownership");
    assert_eq!(
        widget.view().markup,
        "<div class=\"search-result-item\"><a href=\"/posts/rust-guide/\">Rust Guide</a>\
         <p>Ownership and borrowing are the two ideas everything else in Rust leans on....</p></div>"
    );
}

#[test]
fn no_match_shows_placeholder() {
    let mut widget = loaded_widget();
    widget.on_input("xy");
    assert!(widget.is_visible());
    assert_eq!(widget.view().markup, NO_RESULTS_MARKUP);
}

#[test]
fn description_wins_over_body() {
    let mut widget = loaded_widget();
    widget.on_input("static site");
    assert!(widget.view().markup.contains("<p>Notes from building a blog engine.</p>"));
    assert!(!widget.view().markup.contains("Markdown in"));
}

#[test]
fn body_excerpt_is_cut_at_120_characters() {
    let body = "é".repeat(200);
    let entry = make_entry("Long", &body);
    let html = render_markup(&[&entry]);

    let expected = format!("<p>{}...</p>", "é".repeat(EXCERPT_CHARS));
    assert!(html.contains(&expected));
}

#[test]
fn script_title_is_escaped() {
    let entry = make_entry("<script>alert(1)</script>", "harmless body");
    let html = render_markup(&[&entry]);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn fixture_entities_are_escaped() {
    let mut widget = loaded_widget();
    widget.on_input("entities");
    let markup = &widget.view().markup;
    assert!(markup.contains("Escaping &lt;Angle&gt; Brackets &amp; &quot;Quotes&quot;"));
    assert!(markup.contains("<p>Why &lt;b&gt; is not bold here.</p>"));
}

#[test]
fn body_excerpt_is_escaped() {
    let entry = make_entry("T", "<img src=x onerror=alert(1)>");
    let html = render_markup(&[&entry]);
    assert!(html.contains("<p>&lt;img src=x onerror=alert(1)&gt;...</p>"));
}

#[test]
fn ten_result_items_at_most() {
    let index = corpus_with("common", 25);
    let html = render_markup(&search(Some(&index), "common"));
    assert_eq!(html.matches("search-result-item").count(), 10);
}

#[test]
fn render_replaces_previous_markup() {
    let mut widget = SearchWidget::new(RecordingView::default());
    widget.on_focus();
    widget.on_index_response(Ok(
        r#"[{"title": "First", "url": "/1"}, {"title": "Second", "url": "/2"}]"#.to_string(),
    ));

    widget.on_input("first");
    assert!(widget.view().markup.contains("First"));

    widget.on_input("second");
    assert!(widget.view().markup.contains("Second"));
    assert!(!widget.view().markup.contains("First"));
}
