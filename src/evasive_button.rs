use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use web_sys::{Event, HtmlElement, MouseEvent};
use yew::prelude::*;

use kokuhaku_core::{Evasion, EvasionOutcome, Placement, SoundEffect};

use crate::audio::SoundBoard;
use crate::input;
use crate::rng::MathRandom;

#[derive(Properties, PartialEq)]
pub(crate) struct EvasiveButtonProps {
    pub(crate) label: AttrValue,
    pub(crate) threshold: u32,
    pub(crate) sounds: SoundBoard,
    pub(crate) on_advance: Callback<()>,
}

/// Decline button that jumps away from the pointer until it has dodged
/// `threshold` times, then stays put and accepts clicks.
#[function_component(EvasiveButton)]
pub(crate) fn evasive_button(props: &EvasiveButtonProps) -> Html {
    let threshold = props.threshold;
    let evasion = use_mut_ref(move || Evasion::new(threshold));
    let placement = use_state_eq(|| Placement::Flow);
    let button_ref = use_node_ref();

    let dodge: Rc<dyn Fn()> = {
        let evasion = evasion.clone();
        let placement = placement.clone();
        let sounds = props.sounds.clone();
        Rc::new(move || {
            let Some(viewport) = input::viewport() else {
                return;
            };
            let outcome = evasion.borrow_mut().on_proximity(viewport, &mut MathRandom);
            match outcome {
                EvasionOutcome::Relocate(next) => {
                    sounds.play(SoundEffect::Woosh);
                    placement.set(next);
                }
                EvasionOutcome::Settle => placement.set(Placement::Flow),
            }
        })
    };

    {
        let dodge = dodge.clone();
        let evasion = evasion.clone();
        let button_ref = button_ref.clone();
        use_effect_with((), move |_| {
            let listener = button_ref.cast::<HtmlElement>().map(|button| {
                EventListener::new_with_options(
                    &button,
                    "touchstart",
                    EventListenerOptions {
                        phase: EventListenerPhase::Bubble,
                        passive: false,
                    },
                    move |event: &Event| {
                        // Past the threshold the tap falls through to a normal click.
                        if evasion.borrow().is_evading() {
                            event.prevent_default();
                            dodge();
                        }
                    },
                )
            });
            move || drop(listener)
        });
    }

    let onmouseover = {
        let dodge = dodge.clone();
        Callback::from(move |_: MouseEvent| dodge())
    };

    let onclick = {
        let evasion = evasion.clone();
        let sounds = props.sounds.clone();
        let on_advance = props.on_advance.clone();
        Callback::from(move |_: MouseEvent| {
            if evasion.borrow().on_click() {
                sounds.play(SoundEffect::Click);
                on_advance.emit(());
            }
        })
    };

    html! {
        <button
            id="no-btn"
            class="btn btn-no"
            ref={button_ref}
            style={placement.style()}
            {onmouseover}
            {onclick}
        >
            { props.label.clone() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, MouseEventInit, Touch, TouchEvent, TouchEventInit, TouchInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root(id: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id(id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        root
    }

    fn hover(button: &HtmlElement) {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        let event = MouseEvent::new_with_mouse_event_init_dict("mouseover", &init)
            .expect("mouseover event");
        button.dispatch_event(&event).expect("dispatch mouseover");
    }

    /// Dispatches a cancelable touchstart and reports whether the default was
    /// prevented. `None` when the browser has no touch constructors.
    fn tap(button: &HtmlElement) -> Option<bool> {
        let touch = Touch::new(&TouchInit::new(1, button)).ok()?;
        let touches = js_sys::Array::of1(&touch);
        let init = TouchEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_touches(&touches);
        init.set_target_touches(&touches);
        init.set_changed_touches(&touches);
        let event = TouchEvent::new_with_event_init_dict("touchstart", &init).ok()?;
        button.dispatch_event(&event).expect("dispatch touchstart");
        Some(event.default_prevented())
    }

    fn render_button(root: &Element, advanced: &Rc<Cell<u32>>) -> yew::AppHandle<EvasiveButton> {
        let on_advance = {
            let advanced = advanced.clone();
            Callback::from(move |_| advanced.set(advanced.get() + 1))
        };
        yew::Renderer::<EvasiveButton>::with_root_and_props(
            root.clone(),
            EvasiveButtonProps {
                label: "No".into(),
                threshold: 3,
                sounds: SoundBoard::new(true),
                on_advance,
            },
        )
        .render()
    }

    #[wasm_bindgen_test(async)]
    async fn touch_dodges_then_passes_through_at_threshold() {
        let root = mount_root("evasive-touch-test-root");
        let advanced = Rc::new(Cell::new(0u32));
        let _handle = render_button(&root, &advanced);
        TimeoutFuture::new(0).await;

        let button = root
            .query_selector("#no-btn")
            .expect("query")
            .expect("button rendered")
            .dyn_into::<HtmlElement>()
            .expect("html element");

        for dodge in 1..=3 {
            let Some(prevented) = tap(&button) else {
                return;
            };
            TimeoutFuture::new(0).await;
            assert!(prevented, "touch {dodge} should be suppressed");
            let style = button.get_attribute("style").unwrap_or_default();
            assert!(style.contains("position: fixed"), "style was {style}");
            if dodge < 3 {
                button.click();
                TimeoutFuture::new(0).await;
                assert_eq!(advanced.get(), 0);
            }
        }

        let before = button.get_attribute("style").unwrap_or_default();
        assert_eq!(tap(&button), Some(false));
        TimeoutFuture::new(0).await;
        assert_eq!(button.get_attribute("style").unwrap_or_default(), before);

        button.click();
        TimeoutFuture::new(0).await;
        assert_eq!(advanced.get(), 1);
    }

    #[wasm_bindgen_test(async)]
    async fn dodges_until_threshold_then_advances() {
        let root = mount_root("evasive-test-root");
        let advanced = Rc::new(Cell::new(0u32));
        let _handle = render_button(&root, &advanced);
        TimeoutFuture::new(0).await;

        let button = root
            .query_selector("#no-btn")
            .expect("query")
            .expect("button rendered")
            .dyn_into::<HtmlElement>()
            .expect("html element");

        button.click();
        TimeoutFuture::new(0).await;
        assert_eq!(advanced.get(), 0);

        for _ in 0..3 {
            hover(&button);
            TimeoutFuture::new(0).await;
            let style = button.get_attribute("style").unwrap_or_default();
            assert!(style.contains("position: fixed"), "style was {style}");
        }

        hover(&button);
        TimeoutFuture::new(0).await;
        let style = button.get_attribute("style").unwrap_or_default();
        assert!(style.contains("position: relative"), "style was {style}");

        button.click();
        TimeoutFuture::new(0).await;
        assert_eq!(advanced.get(), 1);
    }
}
