#![cfg(target_arch = "wasm32")]

//! Browser smoke tests: the pure models driven by real browser primitives
//! (DOM nodes, web storage, `performance.now`).

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use site_wasm::anim::{ease_out_expo, Timeline};
use site_wasm::form::{validate, Field};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn element_classes_toggle() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();

    let el = document.create_element("div").unwrap();
    el.class_list().add_1("reveal-up").unwrap();
    assert!(el.class_list().contains("reveal-up"));

    el.class_list().add_1("visible").unwrap();
    el.class_list().remove_1("reveal-up").unwrap();
    assert!(el.class_list().contains("visible"));
    assert!(!el.class_list().contains("reveal-up"));
}

#[wasm_bindgen_test]
fn age_verification_round_trips_through_session_storage() {
    let window = web_sys::window().unwrap();
    let storage = window.session_storage().unwrap().unwrap();

    storage.set_item("tamer_age_verified", "true").unwrap();
    assert_eq!(
        storage.get_item("tamer_age_verified").unwrap().as_deref(),
        Some("true")
    );
    storage.remove_item("tamer_age_verified").unwrap();
}

#[wasm_bindgen_test]
fn timeline_runs_on_the_performance_clock() {
    let window = web_sys::window().unwrap();
    let now = window.performance().unwrap().now();

    let timeline = Timeline::new(now, 1000.0, ease_out_expo);
    assert_eq!(timeline.progress(now), 0.0);
    assert!(timeline.eased(now + 500.0) > 0.5);
    assert!(timeline.is_done(now + 1000.0));
}

#[wasm_bindgen_test]
fn bootstrap_binds_the_consent_gate() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();

    let overlay = document.create_element("div").unwrap();
    overlay.set_id("ageGate");
    let yes = document.create_element("button").unwrap();
    yes.set_id("ageYes");
    overlay.append_child(&yes).unwrap();
    body.append_child(&overlay).unwrap();

    let storage = window.session_storage().unwrap().unwrap();
    storage.remove_item("tamer_age_verified").unwrap();

    site_wasm::wasm::boot().unwrap();

    // Unverified session: the gate holds the scroll lock.
    assert!(body.class_list().contains("no-scroll"));

    yes.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
    assert!(overlay.class_list().contains("hidden"));
    assert_eq!(
        storage.get_item("tamer_age_verified").unwrap().as_deref(),
        Some("true")
    );
    assert!(!body.class_list().contains("no-scroll"));

    storage.remove_item("tamer_age_verified").unwrap();
    overlay.remove();
}

#[wasm_bindgen_test]
fn injected_target_selectors_are_scoped() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();

    let host = document.create_element("div").unwrap();
    host.set_inner_html(
        "<a href=\"#x\">x</a><button></button>\
         <div class=\"slider-dot\"></div><span class=\"month-badge\"></span>\
         <div class=\"skill-fill\" data-width=\"80\"></div>\
         <div class=\"skill-fill\"></div>",
    );
    body.append_child(&host).unwrap();

    // Hover refresh rebinds only elements generated after the initial pass.
    assert_eq!(
        document
            .query_selector_all(".slider-dot, .month-badge")
            .unwrap()
            .length(),
        2
    );
    // Bars without a configured width are never animated.
    assert_eq!(
        document
            .query_selector_all(".skill-fill[data-width]")
            .unwrap()
            .length(),
        1
    );

    host.remove();
}

#[wasm_bindgen_test]
fn validation_messages_are_stable() {
    assert!(validate(Field::Name, "Tamer").is_ok());
    assert!(validate(Field::Email, "fan@example.com").is_ok());
    assert!(validate(Field::Email, "not-an-email").is_err());
}
