// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the scour widget.
//!
//! This is the browser-facing API. One call wires the widget to the page:
//!
//! ```js
//! import init, { initSearchWidget } from './scour.js';
//!
//! await init();
//! initSearchWidget();                                    // stock theme ids
//! initSearchWidget({ indexUrl: '/docs/search_index.json' });
//! ```
//!
//! Everything interesting happens in [`SearchWidget`]; this module only
//! translates DOM events into its handlers and performs the two side effects
//! it asks for (fetch the index, blur the input). The listeners share the
//! widget through `Rc<RefCell<..>>` and live for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent, Node, Response};

use crate::config::WidgetConfig;
use crate::error::{Result, ScourError};
use crate::render::ResultsView;
use crate::widget::{attach_outcome, SearchWidget};

type SharedWidget = Rc<RefCell<SearchWidget<DomResultsView>>>;

impl From<ScourError> for JsValue {
    fn from(e: ScourError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Results container backed by a DOM element.
struct DomResultsView {
    element: Element,
    active_class: String,
}

impl ResultsView for DomResultsView {
    fn set_markup(&mut self, markup: &str) {
        self.element.set_inner_html(markup);
    }

    fn set_active(&mut self, active: bool) {
        let classes = self.element.class_list();
        let toggled = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        if let Err(e) = toggled {
            log::warn!("could not toggle class {}: {:?}", self.active_class, e);
        }
    }
}

/// Attach the search widget to the current page.
///
/// Options (all optional):
/// - `indexUrl`: index location (default: `/search_index.json`)
/// - `inputId`: id of the search input (default: `search-input`)
/// - `resultsId`: id of the results container (default: `search-results`)
/// - `activeClass`: class toggled on the container (default: `active`)
///
/// Returns false, and attaches nothing, when either element is missing.
#[wasm_bindgen(js_name = initSearchWidget)]
pub fn init_search_widget(options: Option<JsValue>) -> std::result::Result<bool, JsValue> {
    // Errs only when a logger is already installed, e.g. on a second call.
    console_log::init_with_level(log::Level::Warn).ok();

    let config: WidgetConfig = match options {
        Some(opts) if !opts.is_undefined() && !opts.is_null() => {
            from_value(opts).map_err(|e| e.to_string())?
        }
        _ => WidgetConfig::default(),
    };

    let attached = page_document().and_then(|document| attach(&document, &config));
    Ok(attach_outcome(attached)?)
}

fn page_document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ScourError::NoDocument)
}

/// Wire a widget to the input and results container of `document`.
///
/// Both elements are looked up before any listener is registered, so a
/// missing one leaves the page untouched.
pub fn attach(document: &Document, config: &WidgetConfig) -> Result<()> {
    let input: HtmlInputElement = find_element(document, &config.input_id)?
        .dyn_into()
        .map_err(|_| ScourError::MissingElement(config.input_id.clone()))?;
    let results = find_element(document, &config.results_id)?;

    let widget: SharedWidget = Rc::new(RefCell::new(SearchWidget::new(DomResultsView {
        element: results.clone(),
        active_class: config.active_class.clone(),
    })));

    // focus → lazy index fetch
    {
        let widget = Rc::clone(&widget);
        let index_url = config.index_url.clone();
        let on_focus = Closure::<dyn FnMut()>::new(move || {
            if widget.borrow_mut().on_focus() {
                let widget = Rc::clone(&widget);
                let index_url = index_url.clone();
                spawn_local(async move {
                    load_index(&widget, &index_url).await;
                });
            }
        });
        listen(&input, "focus", on_focus.as_ref())?;
        on_focus.forget();
    }

    // input → match + render
    {
        let widget = Rc::clone(&widget);
        let source = input.clone();
        let on_input = Closure::<dyn FnMut()>::new(move || {
            widget.borrow_mut().on_input(&source.value());
        });
        listen(&input, "input", on_input.as_ref())?;
        on_input.forget();
    }

    // click anywhere outside input and results → hide
    {
        let widget = Rc::clone(&widget);
        let input = input.clone();
        let results = results.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = is_inside(&input, &results, target.as_ref());
            widget.borrow_mut().on_document_click(inside);
        });
        listen(document, "click", on_click.as_ref())?;
        on_click.forget();
    }

    // Escape → hide + blur
    {
        let widget = Rc::clone(&widget);
        let target = input.clone();
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let blur = widget.borrow_mut().on_keydown(&event.key());
            if blur {
                if let Err(e) = target.blur() {
                    log::warn!("could not blur search input: {:?}", e);
                }
            }
        });
        listen(&input, "keydown", on_keydown.as_ref())?;
        on_keydown.forget();
    }

    log::debug!(
        "search widget attached to #{} / #{}",
        config.input_id,
        config.results_id
    );
    Ok(())
}

/// True when `target` is the input, the results container, or inside either.
pub fn is_inside(input: &Node, results: &Node, target: Option<&Node>) -> bool {
    target.is_some() && (input.contains(target) || results.contains(target))
}

/// Fetch the index at `url` and hand the outcome to the widget.
///
/// The widget is only borrowed once the response is in, never across the
/// await.
pub async fn load_index<V: ResultsView>(widget: &RefCell<SearchWidget<V>>, url: &str) {
    let outcome = fetch_text(url).await;
    widget.borrow_mut().on_index_response(outcome);
}

fn find_element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ScourError::MissingElement(id.to_string()))
}

fn listen(target: &web_sys::EventTarget, event: &str, callback: &JsValue) -> Result<()> {
    target
        .add_event_listener_with_callback(event, callback.unchecked_ref())
        .map_err(js_error)
}

/// GET `url` and return the body text. Non-2xx is an error.
async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or(ScourError::NoDocument)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(ScourError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| ScourError::Parse("response body is not text".to_string()))
}

fn js_error(value: JsValue) -> ScourError {
    ScourError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
