//! Pluggable randomness for the dispatcher.
//!
//! The dispatcher takes `&mut dyn RandomSource` so tests can substitute a
//! scripted sequence and assert exact branch choices.

/// Uniform random integer source.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` must be at least 1.
    fn pick_below(&mut self, bound: usize) -> usize;
}

/// Uniform pick over a slice, or `None` when the slice is empty.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.pick_below(items.len())])
    }
}

/// Browser random source backed by `Math.random()`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct JsRandom;

#[cfg(target_arch = "wasm32")]
impl RandomSource for JsRandom {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn pick_below(&mut self, bound: usize) -> usize {
        // Math.random() is in [0, 1), so the floor stays below `bound`.
        (js_sys::Math::random() * bound as f64).floor() as usize
    }
}

/// Native random source backed by the thread-local generator.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

#[cfg(not(target_arch = "wasm32"))]
impl RandomSource for ThreadRandom {
    fn pick_below(&mut self, bound: usize) -> usize {
        use rand::Rng;
        rand::thread_rng().gen_range(0..bound)
    }
}
