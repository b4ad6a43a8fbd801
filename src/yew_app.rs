use gloo::console;
use gloo::timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use kokuhaku_core::stage::STAGE_TRANSITION_MS;
use kokuhaku_core::{SoundEffect, Stage, StageNavigator, BACKGROUND_MUSIC_ID, PAGE_CONFIG};

use crate::app_router;
use crate::audio::SoundBoard;
use crate::celebration;
use crate::evasive_button::EvasiveButton;
use crate::signature_pad::SignaturePad;
use crate::wheel_view::WheelView;

fn stage_class(active: Option<Stage>, stage: Stage) -> Classes {
    classes!("stage", (active == Some(stage)).then_some("active"))
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let options = use_memo((), |_| app_router::load_page_options());
    let sounds = (*use_state(|| SoundBoard::new(options.start_muted))).clone();
    let indicator = use_state_eq(|| sounds.indicator());
    let navigator = use_mut_ref(StageNavigator::default);
    let active = use_state_eq(|| navigator.borrow().active());
    let active_value = *active;

    {
        let sounds = sounds.clone();
        use_effect_with((), move |_| {
            sounds.prepare_background();
            || ()
        });
    }

    let show_stage = {
        let navigator = navigator.clone();
        let active = active.clone();
        Callback::from(move |stage: Stage| {
            let ticket = navigator.borrow_mut().show(stage);
            active.set(None);
            let navigator = navigator.clone();
            let active = active.clone();
            Timeout::new(STAGE_TRANSITION_MS, move || {
                if let Some(stage) = navigator.borrow_mut().commit(ticket) {
                    console::log!("stage:", stage.id());
                    active.set(Some(stage));
                }
            })
            .forget();
        })
    };

    let go_to_victory = {
        let sounds = sounds.clone();
        let show_stage = show_stage.clone();
        Callback::from(move |_: ()| {
            sounds.play(SoundEffect::Win);
            show_stage.emit(Stage::Victory);
            celebration::trigger_confetti();
        })
    };

    let on_mute = {
        let sounds = sounds.clone();
        let indicator = indicator.clone();
        Callback::from(move |_: MouseEvent| {
            sounds.toggle();
            indicator.set(sounds.indicator());
        })
    };

    let on_accept = {
        let go_to_victory = go_to_victory.clone();
        Callback::from(move |_: MouseEvent| go_to_victory.emit(()))
    };

    let after = |stage: Stage| {
        let show_stage = show_stage.clone();
        Callback::from(move |_: ()| {
            if let Some(next) = stage.next() {
                show_stage.emit(next);
            }
        })
    };

    let question = PAGE_CONFIG.question_for(options.recipient.as_deref());
    let audio = PAGE_CONFIG.audio;

    html! {
        <>
            <button id="mute-btn" class="mute-btn" onclick={on_mute}>{ *indicator }</button>
            <audio id={BACKGROUND_MUSIC_ID} src={audio.background} preload="auto" />
            <audio id={SoundEffect::Click.element_id()} src={audio.click} preload="auto" />
            <audio id={SoundEffect::Woosh.element_id()} src={audio.woosh} preload="auto" />
            <audio id={SoundEffect::Win.element_id()} src={audio.win} preload="auto" />
            <main class="stages">
                <section id={Stage::Ask.id()} class={stage_class(active_value, Stage::Ask)}>
                    <h1>{ question }</h1>
                    <div class="choices">
                        <button id="yes-btn" class="btn btn-yes" onclick={on_accept}>
                            { PAGE_CONFIG.accept_label }
                        </button>
                        <EvasiveButton
                            label={PAGE_CONFIG.decline_label}
                            threshold={PAGE_CONFIG.evasion_threshold}
                            sounds={sounds.clone()}
                            on_advance={after(Stage::Ask)}
                        />
                    </div>
                </section>
                <section id={Stage::Sign.id()} class={stage_class(active_value, Stage::Sign)}>
                    <h1>{ PAGE_CONFIG.sign_heading }</h1>
                    <SignaturePad
                        active={active_value == Some(Stage::Sign)}
                        hint={PAGE_CONFIG.sign_hint}
                        submit_label={PAGE_CONFIG.submit_label}
                        sounds={sounds.clone()}
                        on_submit={after(Stage::Sign)}
                    />
                </section>
                <section id={Stage::Spin.id()} class={stage_class(active_value, Stage::Spin)}>
                    <h1>{ PAGE_CONFIG.wheel_heading }</h1>
                    <WheelView
                        spin_label={PAGE_CONFIG.spin_label}
                        spinning_label={PAGE_CONFIG.spinning_label}
                        sounds={sounds.clone()}
                        on_finished={go_to_victory.clone()}
                    />
                </section>
                <section id={Stage::Victory.id()} class={stage_class(active_value, Stage::Victory)}>
                    <h1>{ PAGE_CONFIG.victory_heading }</h1>
                    <p class="victory-message">{ PAGE_CONFIG.victory_message }</p>
                </section>
            </main>
        </>
    }
}
