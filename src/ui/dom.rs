//! Small helpers over `web_sys` shared by the behavior bindings.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

use crate::core::SetupError;

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Global window and document
pub fn browser() -> Result<(Window, Document), SetupError> {
    let window = web_sys::window().ok_or(SetupError::MissingWindow)?;
    let document = window.document().ok_or(SetupError::MissingDocument)?;
    Ok((window, document))
}

/// First element matching `selector`, or `MissingElement`
pub fn query(document: &Document, selector: &str) -> Result<Element, SetupError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| SetupError::missing(selector))
}

/// Every element matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SetupError> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Downcast an element, naming it in the error when it has the wrong type
pub fn cast<T: JsCast>(element: Element, what: &str) -> Result<T, SetupError> {
    element
        .dyn_into::<T>()
        .map_err(|_| SetupError::Dom(format!("{} has an unexpected element type", what)))
}

/// Register an event listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), SetupError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

    // The page owns the listener from here on
    closure.forget();
    Ok(())
}

/// Run `f` now if `ready`, otherwise on the first `event` on `target`.
pub fn when(
    target: &EventTarget,
    event: &str,
    ready: bool,
    f: impl FnOnce() + 'static,
) -> Result<(), SetupError> {
    if ready {
        f();
        return Ok(());
    }

    let mut pending = Some(f);
    listen(target, event, move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}

/// Create an observer that hands every entry to `on_entry`.
pub fn intersection_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(IntersectionObserverEntry) + 'static,
) -> Result<IntersectionObserver, SetupError> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                on_entry(entry.unchecked_into::<IntersectionObserverEntry>());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    Ok(observer)
}
