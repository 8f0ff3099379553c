use crate::constants::FALLBACK_FRAME_MS;
use crate::log;
use crate::simulation::{SimKnobs, Yard};
use leptos::{
    component, create_effect, create_node_ref, html, on_cleanup, view, IntoView, ReadSignal,
    SignalGetUntracked,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::CanvasRenderingContext2d;

pub mod tower_renderer;
pub mod track_renderer;
pub mod train_renderer;

#[cfg(target_arch = "wasm32")]
type FrameRandom = crate::random::JsRandom;
#[cfg(not(target_arch = "wasm32"))]
type FrameRandom = crate::random::ThreadRandom;

/// Full-viewport canvas running the yard simulation.
///
/// Owns the simulation context: one `Yard`, stepped once per animation
/// frame with the knobs read untracked, then handed to the renderers. A
/// window resize rebuilds the yard wholesale instead of migrating trains.
#[component]
pub fn YardCanvas(knobs: ReadSignal<SimKnobs>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let started = Rc::new(Cell::new(false));
    let running = Rc::new(Cell::new(true));

    {
        let running = Rc::clone(&running);
        on_cleanup(move || running.set(false));
    }

    let started_effect = Rc::clone(&started);
    let running_effect = Rc::clone(&running);
    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if started_effect.get() {
            return;
        }
        started_effect.set(true);

        let window = web_sys::window().expect("window");
        let canvas_elem: web_sys::HtmlCanvasElement = (*canvas).clone();

        let (width, height) = viewport_size(&window);
        size_canvas(&canvas_elem, width, height);

        let yard = match Yard::new(width, height) {
            Ok(yard) => Rc::new(RefCell::new(yard)),
            Err(err) => {
                web_sys::console::error_1(&format!("cannot build track layout: {err}").into());
                return;
            }
        };
        log!("yard initialized at {width}x{height}");

        // Resize replaces the whole simulation context; in-flight trains
        // are not migrated across layouts.
        let resize_closure = {
            let yard = Rc::clone(&yard);
            let canvas = canvas_elem.clone();
            Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let (width, height) = viewport_size(&window);
                match Yard::new(width, height) {
                    Ok(fresh) => {
                        size_canvas(&canvas, width, height);
                        *yard.borrow_mut() = fresh;
                        log!("yard rebuilt at {width}x{height}");
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("cannot rebuild track layout: {err}").into(),
                        );
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .expect("add resize listener");

        let cleanup_window = window.clone();
        on_cleanup(move || {
            let _ = cleanup_window.remove_event_listener_with_callback(
                "resize",
                resize_closure.as_ref().unchecked_ref(),
            );
            resize_closure.forget();
        });

        // Self-rescheduling frame loop. The closure holds itself through
        // the shared slot so it can re-arm after every frame.
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_slot = Rc::clone(&tick);
        let yard_loop = Rc::clone(&yard);
        let running_loop = Rc::clone(&running_effect);
        let canvas_loop = canvas_elem.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running_loop.get() {
                return;
            }
            let current = knobs.get_untracked();
            let mut rng = FrameRandom::default();
            yard_loop.borrow_mut().step(&current, &mut rng);
            render(&canvas_loop, &yard_loop.borrow(), &current);
            if let Some(callback) = tick_slot.borrow().as_ref() {
                schedule_frame(callback);
            }
        }) as Box<dyn FnMut()>));

        // Named guard: the borrow must end before `tick` drops at the end
        // of the effect body.
        let armed = tick.borrow();
        if let Some(callback) = armed.as_ref() {
            schedule_frame(callback);
        }
    });

    view! {
        <canvas node_ref=canvas_ref class="yard-canvas"></canvas>
    }
}

/// Prefer the display-sync callback; fall back to a ~60 fps software timer
/// when `requestAnimationFrame` is unavailable.
fn schedule_frame(tick: &Closure<dyn FnMut()>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window
        .request_animation_frame(tick.as_ref().unchecked_ref())
        .is_err()
    {
        let func: js_sys::Function = tick.as_ref().clone().unchecked_into();
        gloo_timers::callback::Timeout::new(FALLBACK_FRAME_MS, move || {
            let _ = func.call0(&JsValue::NULL);
        })
        .forget();
    }
}

fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_canvas(canvas: &web_sys::HtmlCanvasElement, width: f64, height: f64) {
    if width > 0.0 && height > 0.0 {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
}

fn render(canvas: &web_sys::HtmlCanvasElement, yard: &Yard, knobs: &SimKnobs) {
    let Ok(Some(context)) = canvas.get_context("2d") else {
        leptos::logging::warn!("Failed to get 2D context");
        return;
    };
    let Ok(ctx) = context.dyn_into::<CanvasRenderingContext2d>() else {
        leptos::logging::warn!("Failed to cast to 2D rendering context");
        return;
    };

    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());
    ctx.clear_rect(0.0, 0.0, width, height);

    track_renderer::draw_rails(&ctx, yard.layout());
    for train in yard.trains() {
        train_renderer::draw_train(&ctx, train, yard.layout(), knobs.show_train_ids);
    }
    tower_renderer::draw_tower(&ctx, width, height);
    if knobs.show_train_ids {
        tower_renderer::draw_schedule(&ctx, yard, width, height);
    }
}
