//! Testimonial slider: wrapped index navigation, generated dot indicators,
//! autoplay, pointer/touch swipe and global arrow keys.
//!
//! Manual navigation (buttons, swipes, dots) restarts the autoplay timer so
//! an interacting user always gets a full interval before it resumes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::carousel::{drag_outcome, CarouselModel, Direction};

use super::a11y;
use super::app::Ctx;
use super::dom;

/// Autoplay advance interval.
const AUTOPLAY_MS: i32 = 6000;

struct Slider {
    ctx: Ctx,
    track: Element,
    dots: RefCell<Vec<Element>>,
    model: RefCell<CarouselModel>,
    autoplay_id: Cell<Option<i32>>,
    drag_start: Cell<Option<f64>>,
}

pub(crate) fn init(ctx: &Ctx) -> Result<(), JsValue> {
    let Some(track) = dom::query(&ctx.document, "#testimonialTrack") else {
        return Ok(());
    };
    let cards = dom::query_all(&ctx.document, ".testimonial-card");
    ctx.state.borrow_mut().total_slides = cards.len();
    if cards.len() < 2 {
        return Ok(());
    }

    let slider = Rc::new(Slider {
        ctx: ctx.clone(),
        track,
        dots: RefCell::new(Vec::new()),
        model: RefCell::new(CarouselModel::new(cards.len())),
        autoplay_id: Cell::new(None),
        drag_start: Cell::new(None),
    });

    create_dots(&slider);
    bind_events(&slider);
    start_autoplay(&slider);
    slider.go_to(0);

    Ok(())
}

fn create_dots(slider: &Rc<Slider>) {
    let Some(container) = dom::query(&slider.ctx.document, "#sliderDots") else {
        return;
    };
    let count = slider.model.borrow().len();
    for i in 0..count {
        let Some(dot) = dom::create(&slider.ctx.document, "div", "slider-dot") else {
            continue;
        };
        let slider2 = Rc::clone(slider);
        dom::listen(&dot, "click", move || {
            slider2.stop_autoplay();
            slider2.model.borrow_mut().go_to(i);
            slider2.render();
            start_autoplay(&slider2);
        });
        let _ = container.append_child(&dot);
        slider.dots.borrow_mut().push(dot.into());
    }
}

fn bind_events(slider: &Rc<Slider>) {
    if let Some(prev) = dom::query(&slider.ctx.document, "#sliderPrev") {
        let slider2 = Rc::clone(slider);
        dom::listen(&prev, "click", move || manual_step(&slider2, Direction::Prev));
    }
    if let Some(next) = dom::query(&slider.ctx.document, "#sliderNext") {
        let slider2 = Rc::clone(slider);
        dom::listen(&next, "click", move || manual_step(&slider2, Direction::Next));
    }

    // Pointer drag: start on the track, end anywhere.
    {
        let slider2 = Rc::clone(slider);
        dom::listen_mouse(&slider.track, "mousedown", move |event| {
            slider2.drag_start.set(Some(event.client_x() as f64));
        });
        let slider2 = Rc::clone(slider);
        dom::listen_mouse(&slider.ctx.document.clone(), "mouseup", move |event| {
            end_drag(&slider2, event.client_x() as f64);
        });
    }

    // Touch swipe.
    {
        let slider2 = Rc::clone(slider);
        dom::listen_touch_passive(&slider.track, "touchstart", move |event| {
            if let Some(touch) = event.touches().item(0) {
                slider2.drag_start.set(Some(touch.client_x() as f64));
            }
        });
        let slider2 = Rc::clone(slider);
        dom::listen_touch(&slider.track, "touchend", move |event| {
            if let Some(touch) = event.changed_touches().item(0) {
                end_drag(&slider2, touch.client_x() as f64);
            }
        });
    }

    // Arrow keys navigate from anywhere on the page.
    let slider2 = Rc::clone(slider);
    dom::listen_keyboard(&slider.ctx.document.clone(), "keydown", move |event| {
        match event.key().as_str() {
            "ArrowLeft" => {
                slider2.model.borrow_mut().prev();
                slider2.render();
            }
            "ArrowRight" => {
                slider2.model.borrow_mut().next();
                slider2.render();
            }
            _ => {}
        }
    });
}

/// Button/swipe navigation: consumes the autoplay window and re-arms it.
fn manual_step(slider: &Rc<Slider>, dir: Direction) {
    slider.stop_autoplay();
    slider.model.borrow_mut().step(dir);
    slider.render();
    start_autoplay(slider);
}

fn end_drag(slider: &Rc<Slider>, end_x: f64) {
    let Some(start_x) = slider.drag_start.take() else {
        return;
    };
    if let Some(dir) = drag_outcome(start_x, end_x) {
        manual_step(slider, dir);
    }
}

fn start_autoplay(slider: &Rc<Slider>) {
    slider.stop_autoplay();
    let slider2 = Rc::clone(slider);
    let id = dom::every(&slider.ctx.window, AUTOPLAY_MS, move || {
        slider2.model.borrow_mut().next();
        slider2.render();
    });
    slider.autoplay_id.set(Some(id));
}

impl Slider {
    fn go_to(&self, index: usize) {
        self.model.borrow_mut().go_to(index);
        self.render();
    }

    fn render(&self) {
        let (index, total) = {
            let model = self.model.borrow();
            (model.index(), model.len())
        };
        self.ctx.state.borrow_mut().slider_index = index;

        dom::set_style(
            &self.track,
            "transform",
            &format!("translateX(-{}%)", index * 100),
        );
        for (i, dot) in self.dots.borrow().iter().enumerate() {
            dom::toggle_class(dot, "active", i == index);
        }
        a11y::announce(
            &self.ctx,
            &format!("Témoignage {} sur {}", index + 1, total),
        );
    }

    fn stop_autoplay(&self) {
        if let Some(id) = self.autoplay_id.take() {
            dom::clear_interval(&self.ctx.window, id);
        }
    }
}
