//! Index loading and visibility across a sequence of events.

use super::common::{fixture_payload, loaded_widget, RecordingView};
use scour::{IndexState, ScourError, SearchWidget, NO_RESULTS_MARKUP};

#[test]
fn index_is_requested_on_first_focus_only() {
    let mut widget = SearchWidget::new(RecordingView::default());
    assert_eq!(widget.loader().state(), &IndexState::Unloaded);

    let fetches = (0..5).filter(|_| widget.on_focus()).count();
    assert_eq!(fetches, 1);
    assert_eq!(widget.loader().state(), &IndexState::Loading);

    widget.on_index_response(Ok(fixture_payload()));
    assert!(!widget.on_focus());
    assert_eq!(widget.loader().entries().map(<[_]>::len), Some(6));
}

#[test]
fn typing_without_focus_searches_nothing() {
    let mut widget = SearchWidget::new(RecordingView::default());
    widget.on_input("rust");
    assert!(widget.is_visible());
    assert_eq!(widget.view().markup, NO_RESULTS_MARKUP);
    assert_eq!(widget.loader().state(), &IndexState::Unloaded);
}

#[test]
fn late_index_does_not_refresh_results() {
    let mut widget = SearchWidget::new(RecordingView::default());
    widget.on_focus();
    widget.on_input("rust");
    assert_eq!(widget.view().markup, NO_RESULTS_MARKUP);

    widget.on_index_response(Ok(fixture_payload()));
    assert_eq!(widget.view().renders, 1);
    assert_eq!(widget.view().markup, NO_RESULTS_MARKUP);

    widget.on_input("rust ");
    assert!(widget.view().markup.contains("Rust Guide"));
}

#[test]
fn http_error_leaves_permanently_empty_index() {
    let mut widget = SearchWidget::new(RecordingView::default());
    widget.on_focus();
    widget.on_index_response(Err(ScourError::Status(500)));

    assert_eq!(widget.loader().state(), &IndexState::Loaded(vec![]));
    assert!(!widget.on_focus(), "failed loads are not retried");

    widget.on_input("rust");
    assert_eq!(widget.view().markup, NO_RESULTS_MARKUP);
}

#[test]
fn malformed_payload_leaves_empty_index() {
    let mut widget = SearchWidget::new(RecordingView::default());
    widget.on_focus();
    widget.on_index_response(Ok("{\"not\": \"an array\"}".to_string()));
    assert_eq!(widget.loader().entries(), Some(&[][..]));
}

#[test]
fn short_input_hides_but_keeps_markup() {
    let mut widget = loaded_widget();
    widget.on_input("rust");
    let shown = widget.view().markup.clone();

    widget.on_input("r");
    assert!(!widget.is_visible());
    assert!(!widget.view().active);
    assert_eq!(widget.view().markup, shown);

    widget.on_input("");
    assert!(!widget.is_visible());
}

#[test]
fn outside_click_and_escape_hide() {
    let mut widget = loaded_widget();

    widget.on_input("rust");
    widget.on_document_click(false);
    assert!(!widget.is_visible());

    widget.on_input("rust");
    assert!(widget.on_keydown("Escape"));
    assert!(!widget.is_visible());
}

#[test]
fn clicks_inside_and_other_keys_leave_results_open() {
    let mut widget = loaded_widget();
    widget.on_input("rust");

    widget.on_document_click(true);
    assert!(!widget.on_keydown("ArrowDown"));
    assert!(!widget.on_keydown("Esc"));
    assert!(widget.is_visible());
}

#[test]
fn each_qualifying_keystroke_rerenders() {
    let mut widget = loaded_widget();
    for query in ["ru", "rus", "rust"] {
        widget.on_input(query);
    }
    assert_eq!(widget.view().renders, 3);
}
