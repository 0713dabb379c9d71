//! Thin helpers over web-sys: queries, classes, styles, storage, timers and
//! listener binding.
//!
//! Listeners are bound with `Closure` + `forget()`: every module here lives
//! as long as the document, so handing ownership to the JS side is the
//! intended lifecycle, not a leak.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, KeyboardEvent,
    MouseEvent, TouchEvent, Window,
};

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub(crate) fn html(el: &Element) -> Option<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
}

pub(crate) fn create(document: &Document, tag: &str, class: &str) -> Option<HtmlElement> {
    let el = document.create_element(tag).ok()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<HtmlElement>().ok()
}

// --- classes -------------------------------------------------------------

pub(crate) fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub(crate) fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub(crate) fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub(crate) fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub(crate) fn body_class(document: &Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        toggle_class(&body, class, on);
    }
}

// --- styles --------------------------------------------------------------

pub(crate) fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(html) = html(el) {
        let _ = html.style().set_property(prop, value);
    }
}

// --- storage & environment ----------------------------------------------

pub(crate) fn session_get(window: &Window, key: &str) -> Option<String> {
    window.session_storage().ok().flatten()?.get_item(key).ok().flatten()
}

pub(crate) fn session_set(window: &Window, key: &str, value: &str) {
    if let Some(storage) = window.session_storage().ok().flatten() {
        let _ = storage.set_item(key, value);
    }
}

pub(crate) fn local_get(window: &Window, key: &str) -> Option<String> {
    window.local_storage().ok().flatten()?.get_item(key).ok().flatten()
}

pub(crate) fn local_set(window: &Window, key: &str, value: &str) {
    if let Some(storage) = window.local_storage().ok().flatten() {
        let _ = storage.set_item(key, value);
    }
}

pub(crate) fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Milliseconds from `performance.now()`, the clock every timeline runs on.
pub(crate) fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

// --- listeners -----------------------------------------------------------

pub(crate) fn listen(target: &EventTarget, event: &str, f: impl FnMut() + 'static) {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

pub(crate) fn listen_event(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(web_sys::Event) + 'static,
) {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

pub(crate) fn listen_mouse(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(MouseEvent) + 'static,
) {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(MouseEvent)>);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

pub(crate) fn listen_keyboard(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(KeyboardEvent) + 'static,
) {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(KeyboardEvent)>);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Passive touch listener (scrolling must never block on the handler).
pub(crate) fn listen_touch_passive(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(TouchEvent) + 'static,
) {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(TouchEvent)>);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    );
    cb.forget();
}

pub(crate) fn listen_touch(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(TouchEvent) + 'static,
) {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(TouchEvent)>);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

// --- timers --------------------------------------------------------------

/// One-shot timeout; the closure deallocates itself after firing.
pub(crate) fn after(window: &Window, delay_ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        delay_ms,
    );
}

/// Repeating interval; returns the handle for `clear_interval`.
pub(crate) fn every(window: &Window, interval_ms: i32, f: impl FnMut() + 'static) -> i32 {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            interval_ms,
        )
        .unwrap_or(0);
    cb.forget();
    id
}

pub(crate) fn clear_interval(window: &Window, id: i32) {
    window.clear_interval_with_handle(id);
}

/// Async timer for the simulated network delay.
pub(crate) async fn sleep(window: &Window, delay_ms: i32) {
    let window = window.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay_ms);
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Field value regardless of control flavour (input, textarea, select).
pub(crate) fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

#[allow(unused)]
pub(crate) fn log_js(tag: &str, err: &JsValue) {
    log::warn!("{tag}: {err:?}");
}
