//! The scroll-reactive group: navbar state, active-link highlighting,
//! back-to-top visibility, the scroll-progress bar, parallax, mobile menu,
//! smooth anchor scrolling and the debounced resize watcher.
//!
//! One throttled scroll listener performs the four scroll-reactive steps in
//! fixed order; parallax runs on its own, tighter throttle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::scroll::{
    active_section, back_to_top_visible, navbar_scrolled, parallax_offset, scroll_progress,
    SectionRect,
};
use crate::util::{Debounce, Throttle};

use super::app::Ctx;
use super::dom;

/// Minimum interval between scroll-group passes.
const SCROLL_THROTTLE_MS: f64 = 50.0;
/// Minimum interval between parallax passes.
const PARALLAX_THROTTLE_MS: f64 = 16.0;
/// Quiet period for the resize watcher.
const RESIZE_QUIET_MS: f64 = 200.0;
/// Fallback nav height for the anchor offset when the navbar is absent.
const NAV_HEIGHT_FALLBACK: f64 = 72.0;

/// Parallax-driven hero elements and their speed coefficients.
const PARALLAX_LAYERS: [(&str, f64); 3] = [
    (".hero-gradient", 0.3),
    (".hero-badge", 0.15),
    (".hero-number", 0.2),
];

pub(crate) fn init(ctx: &Ctx) -> Result<(), JsValue> {
    let Some(navbar) = dom::query(&ctx.document, "#navbar") else {
        return Ok(());
    };

    let links = dom::query_all(&ctx.document, ".nav-link");
    let sections: Vec<(Element, Element)> = links
        .iter()
        .filter_map(|link| {
            let id = link.get_attribute("data-section")?;
            let section = dom::query(&ctx.document, &format!("#{id}"))?;
            Some((link.clone(), section))
        })
        .collect();

    // The progress bar is generated, not authored in the markup.
    let progress = dom::create(&ctx.document, "div", "scroll-progress")
        .ok_or("scroll-progress element")?;
    if let Some(body) = ctx.document.body() {
        let _ = body.append_child(&progress);
    }

    let back_top = dom::query(&ctx.document, "#backTop");
    if let Some(back_top) = &back_top {
        let window = ctx.window.clone();
        dom::listen(back_top, "click", move || {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        });
    }

    // Scroll-reactive group, strictly ordered within each pass.
    {
        let ctx = ctx.clone();
        let navbar = navbar.clone();
        let progress = progress.clone();
        let throttle = RefCell::new(Throttle::new(SCROLL_THROTTLE_MS));
        dom::listen(&ctx.window.clone(), "scroll", move || {
            if !throttle.borrow_mut().ready(dom::now_ms(&ctx.window)) {
                return;
            }
            let scroll_y = ctx.window.scroll_y().unwrap_or(0.0);
            let viewport_h = ctx.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            ctx.state.borrow_mut().scroll_y = scroll_y;

            // (a) condensed navbar state
            dom::toggle_class(&navbar, "scrolled", navbar_scrolled(scroll_y));

            // (b) active navigation link
            let rects: Vec<SectionRect> = sections
                .iter()
                .map(|(_, section)| {
                    let r = section.get_bounding_client_rect();
                    SectionRect {
                        top: r.top(),
                        bottom: r.bottom(),
                    }
                })
                .collect();
            let active = active_section(&rects, viewport_h);
            for (i, (link, _)) in sections.iter().enumerate() {
                dom::toggle_class(link, "active", active == Some(i));
            }

            // (c) back-to-top visibility
            if let Some(back_top) = &back_top {
                dom::toggle_class(back_top, "visible", back_to_top_visible(scroll_y));
            }

            // (d) scroll progress indicator
            let scroll_h = ctx
                .document
                .document_element()
                .map(|el| el.scroll_height() as f64)
                .unwrap_or(0.0);
            let pct = scroll_progress(scroll_y, scroll_h, viewport_h);
            dom::set_style(&progress, "width", &format!("{pct}%"));
            ctx.state.borrow_mut().scroll_progress = pct;
        });
    }

    init_mobile_menu(ctx);
    init_smooth_scroll(ctx, &navbar);
    init_parallax(ctx);

    Ok(())
}

fn init_mobile_menu(ctx: &Ctx) {
    let (Some(burger), Some(menu)) = (
        dom::query(&ctx.document, "#navBurger"),
        dom::query(&ctx.document, "#mobileMenu"),
    ) else {
        return;
    };

    {
        let ctx = ctx.clone();
        let burger2 = burger.clone();
        let menu = menu.clone();
        dom::listen(&burger, "click", move || {
            let open = !ctx.state.borrow().mobile_menu_open;
            set_mobile_menu(&ctx, &burger2, &menu, open);
        });
    }

    for link in dom::query_all(&ctx.document, ".mobile-link") {
        let ctx = ctx.clone();
        let burger = burger.clone();
        let menu = menu.clone();
        dom::listen(&link, "click", move || {
            if ctx.state.borrow().mobile_menu_open {
                set_mobile_menu(&ctx, &burger, &menu, false);
            }
        });
    }
}

fn set_mobile_menu(ctx: &Ctx, burger: &Element, menu: &Element, open: bool) {
    ctx.state.borrow_mut().mobile_menu_open = open;
    dom::toggle_class(burger, "open", open);
    dom::toggle_class(menu, "open", open);
    dom::body_class(&ctx.document, "no-scroll", open);
}

/// Anchor links scroll smoothly, offset by the navbar height.
fn init_smooth_scroll(ctx: &Ctx, navbar: &Element) {
    for link in dom::query_all(&ctx.document, "a[href^=\"#\"]") {
        let ctx = ctx.clone();
        let navbar = navbar.clone();
        let link2 = link.clone();
        dom::listen_event(&link, "click", move |event| {
            let Some(href) = link2.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Some(target) = dom::query(&ctx.document, &href) else {
                return;
            };
            event.prevent_default();

            let nav_height = navbar
                .dyn_ref::<web_sys::HtmlElement>()
                .map(|el| el.offset_height() as f64)
                .unwrap_or(NAV_HEIGHT_FALLBACK);
            let scroll_y = ctx.window.scroll_y().unwrap_or(0.0);
            let top = target.get_bounding_client_rect().top() + scroll_y - nav_height;

            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            ctx.window.scroll_to_with_scroll_to_options(&opts);
        });
    }
}

fn init_parallax(ctx: &Ctx) {
    if dom::media_matches(&ctx.window, "(prefers-reduced-motion: reduce)") {
        return;
    }

    let layers: Vec<(Element, f64)> = PARALLAX_LAYERS
        .iter()
        .filter_map(|&(selector, speed)| dom::query(&ctx.document, selector).map(|el| (el, speed)))
        .collect();
    if layers.is_empty() {
        return;
    }

    let ctx = ctx.clone();
    let throttle = RefCell::new(Throttle::new(PARALLAX_THROTTLE_MS));
    dom::listen(&ctx.window.clone(), "scroll", move || {
        if !throttle.borrow_mut().ready(dom::now_ms(&ctx.window)) {
            return;
        }
        let scroll_y = ctx.window.scroll_y().unwrap_or(0.0);
        let viewport_h = ctx.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        for (el, speed) in &layers {
            // None past the cutoff: the element keeps its last transform.
            if let Some(offset) = parallax_offset(scroll_y, *speed, viewport_h) {
                dom::set_style(el, "transform", &format!("translateY({offset}px)"));
            }
        }
    });
}

/// Debounced resize watcher: refreshes the desktop flag and closes the
/// mobile menu when the layout returns to desktop.
pub(crate) fn init_resize(ctx: &Ctx) -> Result<(), JsValue> {
    let debounce = Rc::new(RefCell::new(Debounce::new(RESIZE_QUIET_MS)));
    let ctx = ctx.clone();
    dom::listen(&ctx.window.clone(), "resize", move || {
        debounce.borrow_mut().trigger(dom::now_ms(&ctx.window));

        let ctx = ctx.clone();
        let debounce = Rc::clone(&debounce);
        dom::after(&ctx.window.clone(), RESIZE_QUIET_MS as i32 + 10, move || {
            if !debounce.borrow_mut().fire(dom::now_ms(&ctx.window)) {
                return;
            }
            let width = ctx
                .window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            ctx.state.borrow_mut().set_viewport_width(width);

            let (is_desktop, menu_open) = {
                let state = ctx.state.borrow();
                (state.is_desktop, state.mobile_menu_open)
            };
            if is_desktop && menu_open {
                if let (Some(burger), Some(menu)) = (
                    dom::query(&ctx.document, "#navBurger"),
                    dom::query(&ctx.document, "#mobileMenu"),
                ) {
                    set_mobile_menu(&ctx, &burger, &menu, false);
                }
            }
        });
    });
    Ok(())
}
