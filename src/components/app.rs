use crate::components::control_panel::ControlPanel;
use crate::components::yard_canvas::YardCanvas;
use crate::simulation::SimKnobs;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (knobs, set_knobs) = create_signal(SimKnobs::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/railyard.css"/>
        <Title text="Railyard Control Tower"/>

        <div class="app">
            <YardCanvas knobs=knobs />
            <ControlPanel knobs=knobs set_knobs=set_knobs />
        </div>
    }
}
