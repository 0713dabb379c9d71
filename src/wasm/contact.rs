//! Contact form: inline validation and the (simulated) async submission.
//!
//! Fields validate on blur; a field already in error re-validates on every
//! input so the message clears the moment the value is fixed. Submission
//! re-validates everything, refuses to call out while anything fails, and
//! always clears the loading state whatever the outcome.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlFormElement, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollBehavior};

use crate::form::{validate, Field};

use super::app::Ctx;
use super::dom;

/// Simulated latency of the opaque submission call.
const SUBMIT_DELAY_MS: i32 = 2000;
/// How long the success banner stays up.
const SUCCESS_VISIBLE_MS: i32 = 6000;

const FAILURE_MESSAGE: &str =
    "Une erreur est survenue. Veuillez réessayer ou contacter directement booking@tamer-official.com";

/// Element id ↔ predicate pairing; error containers follow `#<id>Error`.
const FIELDS: [(&str, Field); 4] = [
    ("fname", Field::Name),
    ("femail", Field::Email),
    ("ftype", Field::Topic),
    ("fmessage", Field::Message),
];

struct BoundField {
    kind: Field,
    el: Element,
    error_el: Option<Element>,
}

impl BoundField {
    /// Runs the predicate and mirrors the outcome into the DOM.
    fn validate(&self) -> bool {
        let value = dom::control_value(&self.el);
        match validate(self.kind, &value) {
            Ok(()) => {
                dom::remove_class(&self.el, "error");
                if let Some(err) = &self.error_el {
                    err.set_text_content(Some(""));
                }
                true
            }
            Err(message) => {
                dom::add_class(&self.el, "error");
                if let Some(err) = &self.error_el {
                    err.set_text_content(Some(message));
                }
                false
            }
        }
    }
}

pub(crate) fn init(ctx: &Ctx) -> Result<(), JsValue> {
    let Some(form) = dom::query(&ctx.document, "#contactForm") else {
        return Ok(());
    };

    let fields: Rc<Vec<BoundField>> = Rc::new(
        FIELDS
            .iter()
            .filter_map(|&(id, kind)| {
                let el = dom::query(&ctx.document, &format!("#{id}"))?;
                let error_el = dom::query(&ctx.document, &format!("#{id}Error"));
                Some(BoundField { kind, el, error_el })
            })
            .collect(),
    );

    for (i, field) in fields.iter().enumerate() {
        {
            let fields = Rc::clone(&fields);
            dom::listen(&field.el, "blur", move || {
                fields[i].validate();
            });
        }
        {
            // Only re-validate live while the field is showing an error.
            let fields = Rc::clone(&fields);
            dom::listen(&field.el, "input", move || {
                if dom::has_class(&fields[i].el, "error") {
                    fields[i].validate();
                }
            });
        }
    }

    {
        let ctx = ctx.clone();
        let form2 = form.clone();
        let fields = Rc::clone(&fields);
        dom::listen_event(&form, "submit", move |event| {
            event.prevent_default();
            handle_submit(&ctx, &form2, &fields);
        });
    }

    Ok(())
}

fn handle_submit(ctx: &Ctx, form: &Element, fields: &Rc<Vec<BoundField>>) {
    let mut all_valid = true;
    for field in fields.iter() {
        if !field.validate() {
            all_valid = false;
        }
    }
    if !all_valid {
        // Bring the first failure on screen; no network call is attempted.
        if let Some(first_error) = form.query_selector(".error").ok().flatten() {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Center);
            first_error.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        return;
    }

    set_loading(ctx, true);

    let ctx = ctx.clone();
    let form = form.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = submit_message(&ctx).await;
        match outcome {
            Ok(()) => on_success(&ctx, &form),
            Err(err) => {
                log::warn!("contact submission failed: {err:?}");
                let _ = ctx.window.alert_with_message(FAILURE_MESSAGE);
            }
        }
        // Guaranteed cleanup on every path.
        set_loading(&ctx, false);
    });
}

/// The opaque external call. The backend contract is not ours; here it is a
/// fixed delay standing in for the round trip.
async fn submit_message(ctx: &Ctx) -> Result<(), JsValue> {
    dom::sleep(&ctx.window, SUBMIT_DELAY_MS).await;
    Ok(())
}

fn set_loading(ctx: &Ctx, loading: bool) {
    let Some(button) = dom::query(&ctx.document, "#submitBtn") else {
        return;
    };
    if let Some(button) = button.dyn_ref::<web_sys::HtmlButtonElement>() {
        button.set_disabled(loading);
    }
    if let Some(text) = button.query_selector(".btn-text").ok().flatten() {
        dom::set_style(&text, "opacity", if loading { "0" } else { "1" });
    }
    if let Some(spinner) = dom::query(&ctx.document, "#btnLoader") {
        dom::toggle_class(&spinner, "visible", loading);
    }
}

fn on_success(ctx: &Ctx, form: &Element) {
    if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
        form.reset();
    }
    if let Some(banner) = dom::query(&ctx.document, "#formSuccess") {
        dom::add_class(&banner, "visible");
        dom::after(&ctx.window, SUCCESS_VISIBLE_MS, move || {
            dom::remove_class(&banner, "visible");
        });
    }
}
