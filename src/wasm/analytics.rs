//! Interaction tracking, disabled by default. Events are structured but only
//! ever reach the console log until a collector endpoint exists.

use wasm_bindgen::JsValue;

use super::app::Ctx;
use super::dom;

/// No consent flow is wired up, so tracking stays off.
const ENABLED: bool = false;

fn track(event: &str, detail: &str) {
    if !ENABLED {
        return;
    }
    log::info!("analytics: {event} {detail}");
}

pub(crate) fn init(ctx: &Ctx) -> Result<(), JsValue> {
    for button in dom::query_all(&ctx.document, ".btn-primary") {
        let label = button.text_content().unwrap_or_default();
        dom::listen(&button, "click", move || {
            track("cta_click", label.trim());
        });
    }

    if let Some(form) = dom::query(&ctx.document, "#contactForm") {
        dom::listen(&form, "submit", || track("form_submit", ""));
    }

    if let Some(yes) = dom::query(&ctx.document, "#ageYes") {
        dom::listen(&yes, "click", || track("age_gate", "accepted"));
    }

    Ok(())
}
