//! Boot progress overlay.
//!
//! Drives [`LoaderModel`] on an animation-frame loop, mirroring each frame's
//! percentage to the bar width and the text label. When the gate was not
//! pre-verified the ramp stalls at its partial target until the window load
//! event starts the finishing phase. Completion — reached normally or via
//! the skip control — fires the fan-out callback exactly once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::loader::{LoaderModel, Step, COMPLETE_DELAY_MS};

use super::app::Ctx;
use super::dom;
use super::raf::RafLoop;

struct Surfaces {
    bar: Option<Element>,
    label: Option<Element>,
}

impl Surfaces {
    fn update(&self, percent: u32) {
        if let Some(bar) = &self.bar {
            dom::set_style(bar, "width", &format!("{percent}%"));
        }
        if let Some(label) = &self.label {
            label.set_text_content(Some(&format!("{percent}%")));
        }
    }
}

pub(crate) fn init(ctx: &Ctx, on_complete: Rc<dyn Fn()>) -> Result<(), JsValue> {
    let Some(overlay) = dom::query(&ctx.document, "#loader") else {
        // No overlay on this page: unlock and fan out immediately.
        finish_page(ctx, None, &on_complete, &Rc::new(Cell::new(false)));
        return Ok(());
    };

    dom::body_class(&ctx.document, "no-scroll", true);

    let surfaces = Rc::new(Surfaces {
        bar: dom::query(&ctx.document, "#loaderProgress"),
        label: dom::query(&ctx.document, "#loaderPercent"),
    });
    let model = Rc::new(RefCell::new(LoaderModel::new(
        dom::now_ms(&ctx.window),
        ctx.state.borrow().age_verified,
    )));
    let completed = Rc::new(Cell::new(false));

    // Slot lets the window-load listener restart the loop after a stall.
    let raf_slot: Rc<RefCell<Option<Rc<RafLoop>>>> = Rc::new(RefCell::new(None));

    let frame = {
        let ctx = ctx.clone();
        let overlay = overlay.clone();
        let surfaces = Rc::clone(&surfaces);
        let model = Rc::clone(&model);
        let completed = Rc::clone(&completed);
        let on_complete = Rc::clone(&on_complete);
        let raf_slot = Rc::clone(&raf_slot);

        move |now: f64| -> bool {
            let step = model.borrow_mut().step(now);
            match step {
                Step::Running(percent) => {
                    surfaces.update(percent);
                    true
                }
                Step::Idle(percent) => {
                    surfaces.update(percent);
                    if ctx.document.ready_state() == "complete" {
                        // Load already happened during the ramp; finish now.
                        model.borrow_mut().finish(now);
                        return true;
                    }
                    let model = Rc::clone(&model);
                    let raf_slot = Rc::clone(&raf_slot);
                    let window = ctx.window.clone();
                    dom::listen(&ctx.window, "load", move || {
                        model.borrow_mut().finish(dom::now_ms(&window));
                        if let Some(raf) = raf_slot.borrow().as_ref() {
                            raf.start();
                        }
                    });
                    false
                }
                Step::Complete => {
                    surfaces.update(100);
                    schedule_completion(&ctx, &overlay, &on_complete, &completed);
                    false
                }
            }
        }
    };

    let raf = Rc::new(RafLoop::new(frame));
    *raf_slot.borrow_mut() = Some(Rc::clone(&raf));
    raf.start();

    // Optional skip control: cancel the in-flight frame, jump to done.
    if let Some(skip) = dom::query(&ctx.document, "#loaderSkip") {
        let ctx = ctx.clone();
        let on_complete = Rc::clone(&on_complete);
        dom::listen(&skip, "click", move || {
            raf.cancel();
            model.borrow_mut().skip();
            surfaces.update(100);
            schedule_completion(&ctx, &overlay, &on_complete, &completed);
        });
    }

    Ok(())
}

fn schedule_completion(
    ctx: &Ctx,
    overlay: &Element,
    on_complete: &Rc<dyn Fn()>,
    completed: &Rc<Cell<bool>>,
) {
    let ctx = ctx.clone();
    let overlay = overlay.clone();
    let on_complete = Rc::clone(on_complete);
    let completed = Rc::clone(completed);
    dom::after(&ctx.window.clone(), COMPLETE_DELAY_MS as i32, move || {
        finish_page(&ctx, Some(&overlay), &on_complete, &completed);
    });
}

fn finish_page(
    ctx: &Ctx,
    overlay: Option<&Element>,
    on_complete: &Rc<dyn Fn()>,
    completed: &Rc<Cell<bool>>,
) {
    if completed.replace(true) {
        return;
    }
    if let Some(overlay) = overlay {
        dom::add_class(overlay, "loaded");
    }
    // The consent overlay may still hold the scroll lock.
    let gate_open = dom::query(&ctx.document, "#ageGate")
        .map(|gate| !dom::has_class(&gate, "hidden"))
        .unwrap_or(false);
    if !gate_open {
        dom::body_class(&ctx.document, "no-scroll", false);
    }
    ctx.state.borrow_mut().is_loaded = true;
    on_complete();
}
