//! Small self-contained widgets: theme toggle, FAQ accordion, nav dropdown,
//! the availability strip and the decorative hero number.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};

use super::app::Ctx;
use super::dom;

// --- theme toggle --------------------------------------------------------

const THEME_KEY: &str = "tamer_theme";
const LIGHT_CLASS: &str = "light-theme";
/// Duration of the decorative spin on the toggle control.
const SPIN_MS: i32 = 400;

pub(crate) fn init_theme(ctx: &Ctx) -> Result<(), JsValue> {
    let Some(toggle) = dom::query(&ctx.document, "#themeToggle") else {
        return Ok(());
    };

    // Restore the persisted preference before first paint of the toggle.
    let light = dom::local_get(&ctx.window, THEME_KEY).as_deref() == Some("light");
    apply_theme(ctx, light);

    let ctx = ctx.clone();
    let toggle2 = toggle.clone();
    dom::listen(&toggle, "click", move || {
        let light = !ctx
            .document
            .body()
            .map(|b| dom::has_class(&b, LIGHT_CLASS))
            .unwrap_or(false);
        apply_theme(&ctx, light);
        dom::local_set(&ctx.window, THEME_KEY, if light { "light" } else { "dark" });

        dom::add_class(&toggle2, "spin");
        let toggle3 = toggle2.clone();
        dom::after(&ctx.window, SPIN_MS, move || {
            dom::remove_class(&toggle3, "spin");
        });
    });

    Ok(())
}

fn apply_theme(ctx: &Ctx, light: bool) {
    dom::body_class(&ctx.document, LIGHT_CLASS, light);
    if let Some(icon) = dom::query(&ctx.document, "#themeIcon") {
        icon.set_text_content(Some(if light { "☀" } else { "☾" }));
    }
}

// --- FAQ accordion -------------------------------------------------------

/// At most one item open; clicking the open item's question closes all.
pub(crate) fn init_faq(ctx: &Ctx) -> Result<(), JsValue> {
    let items = dom::query_all(&ctx.document, ".faq-item");
    if items.is_empty() {
        return Ok(());
    }
    let items = Rc::new(items);

    for (i, item) in items.iter().enumerate() {
        let Some(question) = item.query_selector(".faq-question").ok().flatten() else {
            continue;
        };
        let items = Rc::clone(&items);
        dom::listen(&question, "click", move || {
            let was_open = dom::has_class(&items[i], "open");
            for other in items.iter() {
                dom::remove_class(other, "open");
            }
            if !was_open {
                dom::add_class(&items[i], "open");
            }
        });
    }

    Ok(())
}

// --- nav dropdown --------------------------------------------------------

pub(crate) fn init_dropdown(ctx: &Ctx) -> Result<(), JsValue> {
    let (Some(dropdown), Some(trigger)) = (
        dom::query(&ctx.document, "#navDropdown"),
        dom::query(&ctx.document, "#navDropdownToggle"),
    ) else {
        return Ok(());
    };

    {
        let dropdown = dropdown.clone();
        dom::listen_event(&trigger, "click", move |event| {
            // Must not reach the document-level outside-click handler.
            event.stop_propagation();
            let open = !dom::has_class(&dropdown, "open");
            dom::toggle_class(&dropdown, "open", open);
        });
    }

    for link in dom::query_all(&ctx.document, "#navDropdown a") {
        let dropdown = dropdown.clone();
        dom::listen(&link, "click", move || {
            dom::remove_class(&dropdown, "open");
        });
    }

    // Any click outside the dropdown's subtree closes it.
    let dropdown2 = dropdown.clone();
    dom::listen_event(&ctx.document, "click", move |event| {
        let inside = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| dropdown2.contains(Some(&el)))
            .unwrap_or(false);
        if !inside {
            dom::remove_class(&dropdown2, "open");
        }
    });

    Ok(())
}

// --- availability strip --------------------------------------------------

const MONTHS: [(&str, &str); 12] = [
    ("Janv.", "busy"),
    ("Févr.", "busy"),
    ("Mars", "partial"),
    ("Avril", "available"),
    ("Mai", "available"),
    ("Juin", "partial"),
    ("Juil.", "available"),
    ("Août", "busy"),
    ("Sept.", "available"),
    ("Oct.", "available"),
    ("Nov.", "partial"),
    ("Déc.", "busy"),
];

fn status_label(status: &str) -> &'static str {
    match status {
        "available" => "Disponible",
        "busy" => "Complet",
        "partial" => "Partiellement disponible",
        _ => "",
    }
}

pub(crate) fn init_availability(ctx: &Ctx) -> Result<(), JsValue> {
    let Some(container) = dom::query(&ctx.document, "#availMonths") else {
        return Ok(());
    };

    let fragment = ctx.document.create_document_fragment();
    for (name, status) in MONTHS {
        let Some(badge) = dom::create(&ctx.document, "span", &format!("month-badge {status}"))
        else {
            continue;
        };
        badge.set_text_content(Some(name));
        badge.set_title(status_label(status));
        let _ = fragment.append_child(&badge);
    }
    let _ = container.append_child(&fragment);

    Ok(())
}

// --- hero number ---------------------------------------------------------

const HERO_TICK_MS: i32 = 100;
const HERO_MAX: u32 = 5;

/// Counts 001 → 005 and settles back on 001.
pub(crate) fn init_hero_number(ctx: &Ctx) -> Result<(), JsValue> {
    let Some(el) = dom::query(&ctx.document, "#heroNumber") else {
        return Ok(());
    };

    let count = Rc::new(Cell::new(1u32));
    let interval_id = Rc::new(Cell::new(0i32));
    let window = ctx.window.clone();

    let id = {
        let interval_id = Rc::clone(&interval_id);
        let window = window.clone();
        dom::every(&ctx.window, HERO_TICK_MS, move || {
            let n = count.get();
            el.set_text_content(Some(&format!("{n:03}")));
            count.set(n + 1);
            if n >= HERO_MAX {
                dom::clear_interval(&window, interval_id.get());
                el.set_text_content(Some("001"));
            }
        })
    };
    interval_id.set(id);

    Ok(())
}
