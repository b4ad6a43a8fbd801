use gloo::timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use kokuhaku_core::{SoundEffect, SpinPlan, Wheel};

use crate::audio::SoundBoard;
use crate::rng::MathRandom;

const WHEEL_SEGMENTS: [&str; 6] = ["Hugs", "Dinner", "Kisses", "Movie night", "Flowers", "Breakfast"];

#[derive(Properties, PartialEq)]
pub(crate) struct WheelViewProps {
    pub(crate) spin_label: AttrValue,
    pub(crate) spinning_label: AttrValue,
    pub(crate) sounds: SoundBoard,
    pub(crate) on_finished: Callback<()>,
}

#[function_component(WheelView)]
pub(crate) fn wheel_view(props: &WheelViewProps) -> Html {
    let wheel = use_mut_ref(Wheel::new);
    let plan = use_state_eq(|| None::<SpinPlan>);

    let onclick = {
        let wheel = wheel.clone();
        let plan = plan.clone();
        let sounds = props.sounds.clone();
        let on_finished = props.on_finished.clone();
        Callback::from(move |_: MouseEvent| {
            sounds.play(SoundEffect::Click);
            let Some(next) = wheel.borrow_mut().spin(&mut MathRandom) else {
                return;
            };
            plan.set(Some(next));
            let on_finished = on_finished.clone();
            Timeout::new(next.settle_ms, move || on_finished.emit(())).forget();
        })
    };

    let spinning = plan.is_some();
    let style = plan.map(|plan| plan.transform()).unwrap_or_default();
    let label = if spinning {
        props.spinning_label.clone()
    } else {
        props.spin_label.clone()
    };
    let segment_angle = 360.0 / WHEEL_SEGMENTS.len() as f64;
    let segments: Html = WHEEL_SEGMENTS
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let style = format!(
                "transform: rotate({}deg) translateY(-38%);",
                segment_angle * index as f64 + segment_angle / 2.0
            );
            html! { <span class="wheel-label" {style}>{ *text }</span> }
        })
        .collect();

    html! {
        <div class="wheel-area">
            <div class="wheel-pointer" />
            <div id="wheel" class="wheel" {style}>{ segments }</div>
            <button id="spin-btn" class="btn" disabled={spinning} {onclick}>{ label }</button>
        </div>
    }
}
