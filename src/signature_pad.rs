use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use kokuhaku_core::signature::{backing_size, STROKE_CAP, STROKE_COLOR, STROKE_WIDTH};
use kokuhaku_core::{SignaturePad as PadState, SoundEffect, StrokeStep, SurfacePoint};

use crate::audio::SoundBoard;
use crate::input;

#[derive(Properties, PartialEq)]
pub(crate) struct SignaturePadProps {
    pub(crate) active: bool,
    pub(crate) hint: AttrValue,
    pub(crate) submit_label: AttrValue,
    pub(crate) sounds: SoundBoard,
    pub(crate) on_submit: Callback<()>,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Matches the bitmap to the element's box. Existing strokes are discarded.
fn resize_canvas(canvas_ref: &NodeRef) {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let rect = canvas.get_bounding_client_rect();
    let (width, height) = backing_size(rect.width(), rect.height());
    canvas.set_width(width);
    canvas.set_height(height);
}

#[function_component(SignaturePad)]
pub(crate) fn signature_pad(props: &SignaturePadProps) -> Html {
    let canvas_ref = use_node_ref();
    let pad = use_mut_ref(PadState::new);
    let signed = use_state_eq(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.active, move |active| {
            if *active {
                resize_canvas(&canvas_ref);
            }
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| resize_canvas(&canvas_ref))
            });
            move || drop(listener)
        });
    }

    let start_draw: Rc<dyn Fn(SurfacePoint)> = {
        let pad = pad.clone();
        let canvas_ref = canvas_ref.clone();
        Rc::new(move |point| {
            let point = pad.borrow_mut().begin(point);
            let Some(ctx) = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| context_2d(&canvas))
            else {
                return;
            };
            ctx.begin_path();
            ctx.set_line_width(STROKE_WIDTH);
            ctx.set_line_cap(STROKE_CAP);
            ctx.set_stroke_style_str(STROKE_COLOR);
            ctx.move_to(point.x, point.y);
        })
    };

    let draw: Rc<dyn Fn(SurfacePoint)> = {
        let pad = pad.clone();
        let canvas_ref = canvas_ref.clone();
        let signed = signed.clone();
        Rc::new(move |point| {
            let step = pad.borrow_mut().extend(point);
            let StrokeStep::LineTo {
                point,
                unlocks_submit,
            } = step
            else {
                return;
            };
            if let Some(ctx) = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| context_2d(&canvas))
            {
                ctx.line_to(point.x, point.y);
                ctx.stroke();
            }
            if unlocks_submit {
                signed.set(true);
            }
        })
    };

    let end_draw: Rc<dyn Fn()> = {
        let pad = pad.clone();
        Rc::new(move || pad.borrow_mut().end())
    };

    {
        let canvas_ref = canvas_ref.clone();
        let start_draw = start_draw.clone();
        let draw = draw.clone();
        let end_draw = end_draw.clone();
        use_effect_with((), move |_| {
            let listeners = canvas_ref.cast::<HtmlCanvasElement>().map(|canvas| {
                let options = EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                };
                let start_canvas = canvas.clone();
                let touch_start = EventListener::new_with_options(
                    &canvas,
                    "touchstart",
                    options,
                    move |event: &Event| {
                        event.prevent_default();
                        if let Some(point) = input::surface_point(event, &start_canvas) {
                            start_draw(point);
                        }
                    },
                );
                let move_canvas = canvas.clone();
                let touch_move = EventListener::new_with_options(
                    &canvas,
                    "touchmove",
                    options,
                    move |event: &Event| {
                        event.prevent_default();
                        if let Some(point) = input::surface_point(event, &move_canvas) {
                            draw(point);
                        }
                    },
                );
                let touch_end = EventListener::new(&canvas, "touchend", move |_| end_draw());
                (touch_start, touch_move, touch_end)
            });
            move || drop(listeners)
        });
    }

    let onmousedown = {
        let canvas_ref = canvas_ref.clone();
        let start_draw = start_draw.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            if let Some(point) = input::surface_point(&event, &canvas) {
                start_draw(point);
            }
        })
    };
    let onmousemove = {
        let canvas_ref = canvas_ref.clone();
        let draw = draw.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            if let Some(point) = input::surface_point(&event, &canvas) {
                draw(point);
            }
        })
    };
    let onmouseup = {
        let end_draw = end_draw.clone();
        Callback::from(move |_: MouseEvent| end_draw())
    };

    let on_submit_click = {
        let pad = pad.clone();
        let sounds = props.sounds.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            if !pad.borrow().can_submit() {
                return;
            }
            sounds.play(SoundEffect::Click);
            on_submit.emit(());
        })
    };

    html! {
        <div class="signature">
            <p class="hint">{ props.hint.clone() }</p>
            <canvas
                id="signature-pad"
                class="signature-pad"
                ref={canvas_ref}
                {onmousedown}
                {onmousemove}
                {onmouseup}
            />
            <button
                id="submit-sig"
                class="btn"
                disabled={!*signed}
                onclick={on_submit_click}
            >
                { props.submit_label.clone() }
            </button>
        </div>
    }
}
