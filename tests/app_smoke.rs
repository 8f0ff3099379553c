#![cfg(target_arch = "wasm32")]

use railyard::random::JsRandom;
use railyard::simulation::{SimKnobs, Yard};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn yard_builds_and_steps_for_a_browser_viewport() {
    let window = web_sys::window().expect("window");
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0)
        .max(320.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0)
        .max(240.0);

    let mut yard = Yard::new(width, height).expect("valid viewport");
    let knobs = SimKnobs::default();
    let mut rng = JsRandom;
    for _ in 0..300 {
        yard.step(&knobs, &mut rng);
    }
}
