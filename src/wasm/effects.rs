//! Decorative effects: the hero typewriter and the particle canvas.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, Window};

use crate::particles::ParticleField;
use crate::typewriter::{Typewriter, START_DELAY_MS};

use super::app::Ctx;
use super::dom;
use super::raf::RafLoop;

const PHRASES: [&str; 4] = ["Le Phénomène", "L'Inégalable", "Le GOAT", "Fortnite"];

/// Subtitle typewriter: the model decides text and pacing, this driver is a
/// chain of one-shot timeouts.
pub(crate) fn init_typewriter(ctx: &Ctx) -> Result<(), JsValue> {
    let Some(el) = dom::query(&ctx.document, ".title-sub") else {
        return Ok(());
    };

    let machine = Rc::new(RefCell::new(Typewriter::new(
        PHRASES.iter().map(|p| (*p).to_string()).collect(),
    )));
    schedule_tick(ctx.window.clone(), el, machine, START_DELAY_MS as i32);
    Ok(())
}

fn schedule_tick(window: Window, el: Element, machine: Rc<RefCell<Typewriter>>, delay_ms: i32) {
    let window2 = window.clone();
    dom::after(&window, delay_ms, move || {
        let step = machine.borrow_mut().tick();
        el.set_text_content(Some(&step.text));
        schedule_tick(window2, el, machine, step.delay_ms as i32);
    });
}

/// Ambient particle background. Skipped entirely for users who prefer
/// reduced motion.
pub(crate) fn init_particles(ctx: &Ctx) -> Result<(), JsValue> {
    let Some(canvas) = dom::query(&ctx.document, "#particleCanvas") else {
        return Ok(());
    };
    if dom::media_matches(&ctx.window, "(prefers-reduced-motion: reduce)") {
        return Ok(());
    }
    let canvas: HtmlCanvasElement = canvas
        .dyn_into()
        .map_err(|_| JsValue::from_str("#particleCanvas is not a canvas"))?;
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into()?;

    let (width, height) = sync_canvas_size(&ctx.window, &canvas);
    let mut rng = || js_sys::Math::random();
    let field = Rc::new(RefCell::new(ParticleField::new(width, height, &mut rng)));

    {
        let window = ctx.window.clone();
        let canvas = canvas.clone();
        let field = Rc::clone(&field);
        dom::listen(&ctx.window, "resize", move || {
            let (w, h) = sync_canvas_size(&window, &canvas);
            field.borrow_mut().resize(w, h, &mut || js_sys::Math::random());
        });
    }

    let raf = RafLoop::new(move |_now| {
        let mut field = field.borrow_mut();
        field.step(&mut || js_sys::Math::random());

        context.clear_rect(
            0.0,
            0.0,
            f64::from(canvas.width()),
            f64::from(canvas.height()),
        );
        for p in field.particles() {
            context.begin_path();
            let _ = context.arc(p.x, p.y, p.radius, 0.0, TAU);
            context.set_fill_style_str(&format!(
                "rgba(212, 175, 55, {:.3})",
                p.display_opacity()
            ));
            context.fill();
        }
        true
    });
    raf.start();
    // The loop runs for the lifetime of the page.
    std::mem::forget(raf);

    Ok(())
}

/// Matches the canvas pixel buffer to the viewport and returns the new size.
fn sync_canvas_size(window: &Window, canvas: &HtmlCanvasElement) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}
