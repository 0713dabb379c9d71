//! Self-rescheduling `requestAnimationFrame` loop.
//!
//! The closure is stored in its own slot so it can reschedule itself from
//! within; the callback receives the DOM high-resolution timestamp and
//! returns whether another frame should be requested. Finite animations
//! self-terminate by returning `false`; permanent loops (cursor, particles)
//! simply never do. `cancel` exists for the one explicit cancellation point
//! in the design, the loader's skip control.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameClosure = Closure<dyn FnMut(f64)>;

pub(crate) struct RafLoop {
    inner: Rc<Inner>,
}

struct Inner {
    /// The JS closure registered with `requestAnimationFrame`; set once in
    /// `start` and referenced from inside itself.
    closure: RefCell<Option<FrameClosure>>,
    /// User callback: timestamp in, keep-running out.
    callback: RefCell<Box<dyn FnMut(f64) -> bool>>,
    running: Cell<bool>,
    raf_id: Cell<i32>,
}

impl RafLoop {
    pub(crate) fn new(callback: impl FnMut(f64) -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Requests the first frame. No-op while already running; restartable
    /// after the callback stopped the loop (the loader's stall/finish path).
    pub(crate) fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        if self.inner.closure.borrow().is_none() {
            let inner = Rc::clone(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                if !inner.running.get() {
                    return;
                }
                let keep_going = (inner.callback.borrow_mut())(timestamp_ms);
                if keep_going && inner.running.get() {
                    Inner::schedule(&inner);
                } else {
                    inner.running.set(false);
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        Inner::schedule(&self.inner);
    }

    /// Cancels the in-flight scheduled frame.
    pub(crate) fn cancel(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        if let Some(window) = web_sys::window() {
            window.cancel_animation_frame(self.inner.raf_id.get()).ok();
        }
    }
}

impl Inner {
    fn schedule(inner: &Rc<Inner>) {
        let Some(window) = web_sys::window() else {
            inner.running.set(false);
            return;
        };
        let borrow = inner.closure.borrow();
        let Some(closure) = borrow.as_ref() else {
            return;
        };
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => inner.raf_id.set(id),
            Err(_) => inner.running.set(false),
        }
    }
}
