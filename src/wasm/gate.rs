//! Session-scoped consent gate.
//!
//! A previously verified session skips the overlay entirely. Accepting
//! persists the flag, unlocks scrolling and lets the loader ramp to 100;
//! rejecting navigates away from the site, with no recovery path.

use wasm_bindgen::JsValue;

use super::app::Ctx;
use super::dom;

const STORAGE_KEY: &str = "tamer_age_verified";
const REJECT_URL: &str = "https://www.google.com";

pub(crate) fn init(ctx: &Ctx) -> Result<(), JsValue> {
    let Some(overlay) = dom::query(&ctx.document, "#ageGate") else {
        // Feature not present on this page.
        return Ok(());
    };

    if dom::session_get(&ctx.window, STORAGE_KEY).as_deref() == Some("true") {
        dom::add_class(&overlay, "hidden");
        ctx.state.borrow_mut().age_verified = true;
        return Ok(());
    }

    dom::body_class(&ctx.document, "no-scroll", true);

    if let Some(yes) = dom::query(&ctx.document, "#ageYes") {
        let ctx = ctx.clone();
        let overlay = overlay.clone();
        dom::listen(&yes, "click", move || {
            dom::session_set(&ctx.window, STORAGE_KEY, "true");
            ctx.state.borrow_mut().age_verified = true;
            dom::add_class(&overlay, "hidden");
            dom::body_class(&ctx.document, "no-scroll", false);
        });
    }

    if let Some(no) = dom::query(&ctx.document, "#ageNo") {
        let window = ctx.window.clone();
        dom::listen(&no, "click", move || {
            let _ = window.location().set_href(REJECT_URL);
        });
    }

    Ok(())
}
