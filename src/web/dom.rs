//! Thin web-sys helpers shared by the bindings.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::FolioError;

pub fn window() -> Result<Window, FolioError> {
    web_sys::window().ok_or(FolioError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, FolioError> {
    window.document().ok_or(FolioError::NoDocument)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FolioError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// First element matching `selector` as an `HtmlElement`, if any.
pub fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, FolioError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

/// Add or remove a class.
pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), FolioError> {
    let list = el.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), FolioError> {
    el.style().set_property(property, value)?;
    Ok(())
}

/// `window.innerHeight`, or zero if it cannot be read.
pub fn inner_height(window: &Window) -> f64 {
    match window.inner_height() {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

/// `window.scrollY`, or zero if it cannot be read.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Attach a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FolioError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but registered as passive (never calls `preventDefault`).
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FolioError>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Log a failure from inside an event handler, where there is no caller to propagate to.
pub fn warn_on_err(context: &str, result: Result<(), FolioError>) {
    if let Err(e) = result {
        log::warn!("{context} failed [{}]: {e}", e.code());
    }
}
