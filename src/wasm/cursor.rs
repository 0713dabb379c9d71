//! Custom cursor: a tight-following dot and a loose-following ring.
//!
//! Each frame lerps the two smoothed positions toward the latest raw pointer
//! reading; the differing factors produce the lag proportional to pointer
//! velocity. Touch-only devices get the native cursor back.

use wasm_bindgen::JsValue;

use crate::util::lerp;

use super::app::Ctx;
use super::dom;
use super::raf::RafLoop;

/// Per-frame interpolation factor for the dot.
const DOT_FACTOR: f64 = 0.85;
/// Per-frame interpolation factor for the ring.
const RING_FACTOR: f64 = 0.12;

pub(crate) fn init(ctx: &Ctx) -> Result<(), JsValue> {
    let (Some(dot), Some(ring)) = (
        dom::query(&ctx.document, "#cursor"),
        dom::query(&ctx.document, "#cursorFollower"),
    ) else {
        return Ok(());
    };

    if dom::media_matches(&ctx.window, "(hover: none)") {
        dom::set_style(&dot, "display", "none");
        dom::set_style(&ring, "display", "none");
        return Ok(());
    }

    // Raw pointer tracking; first movement fades the cursor in.
    {
        let ctx = ctx.clone();
        let dot = dot.clone();
        let ring = ring.clone();
        let mut visible = false;
        dom::listen_mouse(&ctx.document.clone(), "mousemove", move |event| {
            let mut state = ctx.state.borrow_mut();
            state.mouse_x = event.client_x() as f64;
            state.mouse_y = event.client_y() as f64;
            drop(state);
            if !visible {
                visible = true;
                dom::set_style(&dot, "opacity", "1");
                dom::set_style(&ring, "opacity", "1");
            }
        });
    }
    {
        let dot = dot.clone();
        let ring = ring.clone();
        dom::listen(&ctx.document, "mouseleave", move || {
            dom::set_style(&dot, "opacity", "0");
            dom::set_style(&ring, "opacity", "0");
        });
    }

    bind_hover_targets(ctx, "a, button, [data-cursor=\"hover\"]", "cursor-hover");
    bind_hover_targets(ctx, "input, textarea, select", "cursor-text");

    // Permanent smoothing loop; torn down only by page unload.
    let loop_ctx = ctx.clone();
    let raf = RafLoop::new(move |_now| {
        let mut state = loop_ctx.state.borrow_mut();
        state.cursor_x = lerp(state.cursor_x, state.mouse_x, DOT_FACTOR);
        state.cursor_y = lerp(state.cursor_y, state.mouse_y, DOT_FACTOR);
        state.follower_x = lerp(state.follower_x, state.mouse_x, RING_FACTOR);
        state.follower_y = lerp(state.follower_y, state.mouse_y, RING_FACTOR);
        let (cx, cy) = (state.cursor_x, state.cursor_y);
        let (fx, fy) = (state.follower_x, state.follower_y);
        drop(state);

        dom::set_style(
            &dot,
            "transform",
            &format!("translate({cx}px, {cy}px) translate(-50%, -50%)"),
        );
        dom::set_style(
            &ring,
            "transform",
            &format!("translate({fx}px, {fy}px) translate(-50%, -50%)"),
        );
        true
    });
    raf.start();
    std::mem::forget(raf);

    Ok(())
}

/// Binds hover listeners on elements injected after the initial pass. Only
/// the generated elements: anchors and buttons were already bound at init.
pub(crate) fn refresh_hover_targets(ctx: &Ctx) {
    bind_hover_targets(ctx, ".slider-dot, .month-badge", "cursor-hover");
}

fn bind_hover_targets(ctx: &Ctx, selector: &str, class: &'static str) {
    for el in dom::query_all(&ctx.document, selector) {
        let document = ctx.document.clone();
        dom::listen(&el, "mouseenter", move || {
            dom::body_class(&document, class, true);
        });
        let document = ctx.document.clone();
        dom::listen(&el, "mouseleave", move || {
            dom::body_class(&document, class, false);
        });
    }
}
