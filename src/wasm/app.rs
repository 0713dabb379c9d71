//! Bootstrap and module fan-out.
//!
//! Control flow: gate check and loader start immediately; everything else
//! initializes once, when the loader signals completion. Each module's init
//! is independently guarded so a decorative failure never blocks siblings.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::state::SharedState;

use super::{a11y, analytics, contact, cursor, dom, effects, gate, loader, navbar, observe, slider, tabs, widgets};

/// Shared handles passed to every module's `init`.
#[derive(Clone)]
pub(crate) struct Ctx {
    pub window: Window,
    pub document: Document,
    pub state: Rc<RefCell<SharedState>>,
}

pub(crate) fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);

    let ctx = Ctx {
        window,
        document,
        state: Rc::new(RefCell::new(SharedState::new(width))),
    };

    install_error_layer(&ctx);

    guard("gate", gate::init(&ctx));

    let fanout_ctx = ctx.clone();
    guard(
        "loader",
        loader::init(&ctx, Rc::new(move || init_modules(&fanout_ctx))),
    );

    Ok(())
}

/// Contains a module failure at its boundary: log and move on.
pub(crate) fn guard(name: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("module '{name}' failed to initialize: {err:?}");
    }
}

/// Fan-out initialization of everything behind the loader. Runs exactly once
/// (the loader guarantees a single completion signal).
fn init_modules(ctx: &Ctx) {
    guard("a11y", a11y::init(ctx));
    guard("cursor", cursor::init(ctx));
    guard("navbar", navbar::init(ctx));

    let skills = observe::SkillBars::collect(ctx);
    guard("tabs", tabs::init(ctx, &skills));
    guard("reveal", observe::init_reveal(ctx));
    guard("counters", observe::init_counters(ctx));
    guard("skills-observer", observe::init_skills_observer(ctx, &skills));
    guard("lazy-images", observe::init_lazy_images(ctx));

    guard("slider", slider::init(ctx));
    guard("contact", contact::init(ctx));
    guard("theme", widgets::init_theme(ctx));
    guard("faq", widgets::init_faq(ctx));
    guard("dropdown", widgets::init_dropdown(ctx));
    guard("availability", widgets::init_availability(ctx));
    guard("hero-number", widgets::init_hero_number(ctx));
    guard("typewriter", effects::init_typewriter(ctx));
    guard("particles", effects::init_particles(ctx));
    guard("analytics", analytics::init(ctx));
    guard("resize", navbar::init_resize(ctx));

    // Dots and badges were injected above; give them cursor hover handlers.
    cursor::refresh_hover_targets(ctx);

    // Prime the scroll-reactive group with the current position.
    if let Ok(ev) = web_sys::Event::new("scroll") {
        let _ = ctx.window.dispatch_event(&ev);
    }

    log::info!("all modules initialized");
}

/// Top-level containment: decorative-feature failures are logged, never
/// allowed to take the page down.
fn install_error_layer(ctx: &Ctx) {
    dom::listen_event(&ctx.window, "error", |event| {
        use wasm_bindgen::JsCast;
        let message = event
            .dyn_ref::<web_sys::ErrorEvent>()
            .map(|e| e.message())
            .unwrap_or_default();
        log::warn!("script error: {message}");
    });

    dom::listen_event(&ctx.window, "unhandledrejection", |event| {
        use wasm_bindgen::JsCast;
        let reason = event
            .dyn_ref::<web_sys::PromiseRejectionEvent>()
            .map(|e| e.reason())
            .unwrap_or(JsValue::UNDEFINED);
        log::warn!("unhandled rejection: {reason:?}");
    });
}
