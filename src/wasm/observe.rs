//! Viewport-triggered animations: reveal-on-scroll, animated counters, stat
//! and skill bar fills, lazy image loading.
//!
//! Everything here runs on intersection observation rather than polling, and
//! every trigger is single-shot: reveal elements are unobserved after their
//! first intersection, counters and skill bars latch behind flags.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::anim::{counter_duration_ms, ease_out_expo, Timeline};
use crate::util::Once;

use super::app::Ctx;
use super::dom;
use super::raf::RafLoop;

/// Per-counter stagger.
const COUNTER_STAGGER_MS: i32 = 120;
/// Stat-bar fills start after the counters are under way.
const STAT_BAR_BASE_DELAY_MS: i32 = 300;
const STAT_BAR_STAGGER_MS: i32 = 100;
/// Per-skill-bar stagger.
const SKILL_STAGGER_MS: i32 = 80;

/// Wraps the observer-construction ceremony: entries arrive as a JS array.
fn make_observer(
    mut callback: impl FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
    options: &IntersectionObserverInit,
) -> Result<IntersectionObserver, JsValue> {
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries: Vec<IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            callback(entries, &observer);
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let observer =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), options)?;
    cb.forget();
    Ok(observer)
}

/// Reveal elements get a `visible` class the first time any part of them
/// crosses into the viewport (biased 10% before the bottom edge), then are
/// unobserved — no re-hide on scroll-away.
pub(crate) fn init_reveal(ctx: &Ctx) -> Result<(), JsValue> {
    let elements = dom::query_all(&ctx.document, ".reveal-up, .reveal-left, .reveal-right");
    if elements.is_empty() {
        return Ok(());
    }

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px 0px -10% 0px");
    options.set_threshold(&JsValue::from(0.05));

    let observer = make_observer(
        |entries, observer| {
            for entry in entries {
                if entry.is_intersecting() {
                    dom::add_class(&entry.target(), "visible");
                    observer.unobserve(&entry.target());
                }
            }
        },
        &options,
    )?;

    for el in &elements {
        observer.observe(el);
    }
    Ok(())
}

/// Counters and stat bars animate together, once, when the stats section
/// first becomes a fifth visible.
pub(crate) fn init_counters(ctx: &Ctx) -> Result<(), JsValue> {
    let counters = dom::query_all(&ctx.document, ".stat-number[data-target]");
    if counters.is_empty() {
        return Ok(());
    }
    let Some(sentinel) = dom::query(&ctx.document, "#stats") else {
        return Ok(());
    };
    let bars = dom::query_all(&ctx.document, ".stat-bar-fill[data-width]");

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(0.2));

    let ctx2 = ctx.clone();
    let observer = make_observer(
        move |entries, observer| {
            for entry in entries {
                if !entry.is_intersecting() || ctx2.state.borrow().counters_animated {
                    continue;
                }
                ctx2.state.borrow_mut().counters_animated = true;

                for (i, el) in counters.iter().enumerate() {
                    let target: u32 = el
                        .get_attribute("data-target")
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(0);
                    let window = ctx2.window.clone();
                    let el = el.clone();
                    dom::after(
                        &ctx2.window,
                        COUNTER_STAGGER_MS * i as i32,
                        move || animate_counter(&window, el, target),
                    );
                }

                for (i, bar) in bars.iter().enumerate() {
                    fill_bar_after(
                        &ctx2.window,
                        bar,
                        STAT_BAR_BASE_DELAY_MS + STAT_BAR_STAGGER_MS * i as i32,
                    );
                }

                observer.unobserve(&entry.target());
            }
        },
        &options,
    )?;

    observer.observe(&sentinel);
    Ok(())
}

/// Counts the displayed integer from 0 to `target` with an exponential
/// ease-out; the final frame pins the exact target.
fn animate_counter(window: &Window, el: Element, target: u32) {
    let timeline = Timeline::new(
        dom::now_ms(window),
        counter_duration_ms(target),
        ease_out_expo,
    );
    let raf = RafLoop::new(move |now| {
        let value = (timeline.eased(now) * f64::from(target)).round() as u32;
        el.set_text_content(Some(&value.to_string()));
        if timeline.is_done(now) {
            el.set_text_content(Some(&target.to_string()));
            return false;
        }
        true
    });
    raf.start();
}

/// Sets a bar's width to its `data-width` percentage after `delay_ms` (the
/// CSS transition does the visual easing).
fn fill_bar_after(window: &Window, bar: &Element, delay_ms: i32) {
    let Some(width) = bar.get_attribute("data-width") else {
        return;
    };
    let bar = bar.clone();
    dom::after(window, delay_ms, move || {
        dom::set_style(&bar, "width", &format!("{width}%"));
    });
}

/// The skill-bar fill set, shared between the tabs module (explicit switch
/// to the skills tab) and the section observer below. `animate` is
/// explicitly single-shot.
pub(crate) struct SkillBars {
    window: Window,
    bars: Vec<Element>,
    once: RefCell<Once>,
}

impl SkillBars {
    pub(crate) fn collect(ctx: &Ctx) -> Rc<Self> {
        Rc::new(Self {
            window: ctx.window.clone(),
            bars: dom::query_all(&ctx.document, ".skill-fill[data-width]"),
            once: RefCell::new(Once::new()),
        })
    }

    pub(crate) fn animate(&self) {
        if !self.once.borrow_mut().take() {
            return;
        }
        for (i, bar) in self.bars.iter().enumerate() {
            fill_bar_after(&self.window, bar, SKILL_STAGGER_MS * i as i32);
        }
    }
}

/// Second trigger path for the skill bars: the containing section scrolls
/// into view while the skills tab is already the active one.
pub(crate) fn init_skills_observer(ctx: &Ctx, skills: &Rc<SkillBars>) -> Result<(), JsValue> {
    let Some(section) = dom::query(&ctx.document, ".about") else {
        return Ok(());
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(0.3));

    let ctx2 = ctx.clone();
    let skills = Rc::clone(skills);
    let observer = make_observer(
        move |entries, _| {
            for entry in entries {
                if entry.is_intersecting() && ctx2.state.borrow().active_tab == "skills" {
                    skills.animate();
                }
            }
        },
        &options,
    )?;

    observer.observe(&section);
    Ok(())
}

/// Deferred image loading: swap `data-src` into `src` as images approach the
/// viewport. If the observer cannot be constructed, load everything eagerly.
pub(crate) fn init_lazy_images(ctx: &Ctx) -> Result<(), JsValue> {
    let images = dom::query_all(&ctx.document, "[data-src]");
    if images.is_empty() {
        return Ok(());
    }

    let options = IntersectionObserverInit::new();
    options.set_root_margin("200px");

    let observer = make_observer(
        |entries, observer| {
            for entry in entries {
                if entry.is_intersecting() {
                    load_image(&entry.target());
                    observer.unobserve(&entry.target());
                }
            }
        },
        &options,
    );

    match observer {
        Ok(observer) => {
            for img in &images {
                observer.observe(img);
            }
        }
        Err(_) => {
            for img in &images {
                load_image(img);
            }
        }
    }
    Ok(())
}

fn load_image(el: &Element) {
    if let Some(src) = el.get_attribute("data-src") {
        let _ = el.set_attribute("src", &src);
        let _ = el.remove_attribute("data-src");
    }
}
