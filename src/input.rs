use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element, Event, HtmlCanvasElement, MouseEvent, Touch, TouchEvent};

use kokuhaku_core::{SurfacePoint, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerKind {
    Mouse,
    Touch,
    Unknown,
}

impl PointerKind {
    pub(crate) fn from_event_type(value: &str) -> Self {
        if value.starts_with("mouse") {
            PointerKind::Mouse
        } else if value.starts_with("touch") {
            PointerKind::Touch
        } else {
            PointerKind::Unknown
        }
    }
}

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for HtmlCanvasElement {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

/// Maps a mouse or touch event onto the element's local coordinate space.
pub(crate) fn surface_point(event: &Event, element: &impl HasClientRect) -> Option<SurfacePoint> {
    match PointerKind::from_event_type(&event.type_()) {
        PointerKind::Mouse => {
            let event = event.dyn_ref::<MouseEvent>()?;
            Some(SurfacePoint::from_offset(
                event.offset_x() as f64,
                event.offset_y() as f64,
            ))
        }
        PointerKind::Touch => {
            let event = event.dyn_ref::<TouchEvent>()?;
            let touch = first_touch(event)?;
            let rect = element.client_rect();
            Some(SurfacePoint::from_client(
                touch.client_x() as f64,
                touch.client_y() as f64,
                rect.left(),
                rect.top(),
            ))
        }
        PointerKind::Unknown => None,
    }
}

fn first_touch(event: &TouchEvent) -> Option<Touch> {
    event.touches().item(0)
}

pub(crate) fn viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn pointer_kind_from_event_names() {
        assert_eq!(PointerKind::from_event_type("mousedown"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_event_type("mousemove"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_event_type("touchstart"), PointerKind::Touch);
        assert_eq!(PointerKind::from_event_type("resize"), PointerKind::Unknown);
    }

    #[wasm_bindgen_test]
    fn viewport_matches_window() {
        let window = web_sys::window().expect("window available");
        let viewport = viewport().expect("viewport");
        let width = window.inner_width().expect("width").as_f64().expect("number");
        assert_eq!(viewport.width, width);
    }

    #[wasm_bindgen_test]
    fn non_pointer_events_have_no_point() {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let element = document.create_element("div").expect("create div");
        let event = Event::new("resize").expect("event");
        assert!(surface_point(&event, &element).is_none());
    }
}
