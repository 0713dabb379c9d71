#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Behavior layer for the promotional site.
//!
//! Pure models (easing, loader progress, scroll decisions, carousel index
//! math, form validation, typewriter, particles) compile and test on any
//! target; everything touching the DOM lives under `wasm` and only compiles
//! for wasm32.

pub mod anim;
pub mod carousel;
pub mod form;
pub mod loader;
pub mod particles;
pub mod scroll;
pub mod state;
pub mod typewriter;
pub mod util;

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    mod a11y;
    mod analytics;
    mod app;
    mod contact;
    mod cursor;
    mod dom;
    mod effects;
    mod gate;
    mod loader;
    mod navbar;
    mod observe;
    mod raf;
    mod slider;
    mod tabs;
    mod widgets;

    /// Full bootstrap, also callable from browser tests against an
    /// injected DOM.
    pub fn boot() -> Result<(), JsValue> {
        app::start()
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        boot()
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
