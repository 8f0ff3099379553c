use crate::constants::{
    MAX_ANIMATION_SPEED, MAX_SPAWN_CYCLE, MIN_ANIMATION_SPEED, MIN_SPAWN_CYCLE,
};
use crate::simulation::SimKnobs;
use leptos::{
    component, create_memo, event_target_checked, event_target_value, view, IntoView, ReadSignal,
    SignalGet, SignalSet, WriteSignal,
};

/// Floating panel of the dispatcher's knobs: animation speed, per-side
/// spawn delay and the train-id overlay toggle. Values are clamped to the
/// suggested ranges on the way in; the dispatcher itself never validates.
#[component]
pub fn ControlPanel(
    knobs: ReadSignal<SimKnobs>,
    set_knobs: WriteSignal<SimKnobs>,
) -> impl IntoView {
    let handle_speed_change = move |speed: u32| {
        let clamped = speed.clamp(MIN_ANIMATION_SPEED, MAX_ANIMATION_SPEED);
        let current = knobs.get();
        set_knobs.set(SimKnobs {
            animation_speed: clamped,
            ..current
        });
    };

    let handle_west_cycle_change = move |cycle: u32| {
        let clamped = cycle.clamp(MIN_SPAWN_CYCLE, MAX_SPAWN_CYCLE);
        let current = knobs.get();
        set_knobs.set(SimKnobs {
            west_cycle: clamped,
            ..current
        });
    };

    let handle_east_cycle_change = move |cycle: u32| {
        let clamped = cycle.clamp(MIN_SPAWN_CYCLE, MAX_SPAWN_CYCLE);
        let current = knobs.get();
        set_knobs.set(SimKnobs {
            east_cycle: clamped,
            ..current
        });
    };

    let handle_show_ids_change = move |show: bool| {
        let current = knobs.get();
        set_knobs.set(SimKnobs {
            show_train_ids: show,
            ..current
        });
    };

    let speed = create_memo(move |_| knobs.get().animation_speed);
    let west_cycle = create_memo(move |_| knobs.get().west_cycle);
    let east_cycle = create_memo(move |_| knobs.get().east_cycle);
    let show_ids = create_memo(move |_| knobs.get().show_train_ids);

    view! {
        <div class="control-panel">
            <div class="control-row">
                <label for="speed">"Speed"</label>
                <input
                    id="speed"
                    type="range"
                    min=MIN_ANIMATION_SPEED
                    max=MAX_ANIMATION_SPEED
                    step="1"
                    prop:value=move || speed.get().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse() {
                            handle_speed_change(value);
                        }
                    }
                />
                <span class="control-value">{move || speed.get()}</span>
            </div>

            <div class="control-row">
                <label for="west-cycle">"W spawn delay"</label>
                <input
                    id="west-cycle"
                    type="range"
                    min=MIN_SPAWN_CYCLE
                    max=MAX_SPAWN_CYCLE
                    step="1"
                    prop:value=move || west_cycle.get().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse() {
                            handle_west_cycle_change(value);
                        }
                    }
                />
                <span class="control-value">{move || west_cycle.get()}</span>
            </div>

            <div class="control-row">
                <label for="east-cycle">"E spawn delay"</label>
                <input
                    id="east-cycle"
                    type="range"
                    min=MIN_SPAWN_CYCLE
                    max=MAX_SPAWN_CYCLE
                    step="1"
                    prop:value=move || east_cycle.get().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse() {
                            handle_east_cycle_change(value);
                        }
                    }
                />
                <span class="control-value">{move || east_cycle.get()}</span>
            </div>

            <div class="control-row">
                <label for="show-ids">"Show train ids"</label>
                <input
                    id="show-ids"
                    type="checkbox"
                    prop:checked=move || show_ids.get()
                    on:change=move |ev| handle_show_ids_change(event_target_checked(&ev))
                />
            </div>
        </div>
    }
}
