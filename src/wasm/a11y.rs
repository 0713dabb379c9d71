//! Accessibility layer: skip link, keyboard-navigation detection and a
//! polite live region other modules announce through.

use wasm_bindgen::JsValue;

use super::app::Ctx;
use super::dom;

/// How long an announcement stays in the live region before being cleared.
const ANNOUNCE_CLEAR_MS: i32 = 3000;

const SR_ONLY_STYLE: &str =
    "position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0,0,0,0)";

pub(crate) fn init(ctx: &Ctx) -> Result<(), JsValue> {
    install_skip_link(ctx);
    install_keyboard_detection(ctx);
    install_live_region(ctx);
    Ok(())
}

/// A visually hidden "skip to content" anchor, first in the tab order. It
/// becomes visible only while focused.
fn install_skip_link(ctx: &Ctx) {
    let Some(link) = dom::create(&ctx.document, "a", "sr-only skip-link") else {
        return;
    };
    let _ = link.set_attribute("href", "#hero");
    link.set_text_content(Some("Aller au contenu"));
    let _ = link.set_attribute("style", SR_ONLY_STYLE);

    {
        let link = link.clone();
        dom::listen(&link.clone(), "focus", move || {
            let _ = link.set_attribute(
                "style",
                "position:fixed;top:8px;left:8px;z-index:10000;padding:8px 16px;\
                 background:#000;color:#fff;clip:auto;width:auto;height:auto",
            );
        });
    }
    {
        let link = link.clone();
        dom::listen(&link.clone(), "blur", move || {
            let _ = link.set_attribute("style", SR_ONLY_STYLE);
        });
    }

    if let Some(body) = ctx.document.body() {
        let _ = body.insert_before(&link, body.first_child().as_ref());
    }
}

/// Focus outlines only for keyboard users: Tab turns the `keyboard-nav` body
/// class on, any mouse press turns it off.
fn install_keyboard_detection(ctx: &Ctx) {
    {
        let ctx = ctx.clone();
        dom::listen_keyboard(&ctx.document.clone(), "keydown", move |event| {
            if event.key() == "Tab" {
                dom::body_class(&ctx.document, "keyboard-nav", true);
            }
        });
    }
    let ctx = ctx.clone();
    dom::listen(&ctx.document.clone(), "mousedown", move || {
        dom::body_class(&ctx.document, "keyboard-nav", false);
    });
}

fn install_live_region(ctx: &Ctx) {
    let Some(region) = dom::create(&ctx.document, "div", "sr-only") else {
        return;
    };
    region.set_id("liveRegion");
    let _ = region.set_attribute("aria-live", "polite");
    let _ = region.set_attribute("aria-atomic", "true");
    let _ = region.set_attribute("style", SR_ONLY_STYLE);
    if let Some(body) = ctx.document.body() {
        let _ = body.append_child(&region);
    }
}

/// Pushes a message to screen readers via the live region, then clears it so
/// repeated identical announcements are still read.
pub(crate) fn announce(ctx: &Ctx, message: &str) {
    let Some(region) = dom::query(&ctx.document, "#liveRegion") else {
        return;
    };
    region.set_text_content(Some(message));
    dom::after(&ctx.window, ANNOUNCE_CLEAR_MS, move || {
        region.set_text_content(Some(""));
    });
}
