use std::cell::Cell;

use gloo::console;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use kokuhaku_core::BurstConfig;

const CONFETTI_GLOBAL: &str = "confetti";

thread_local! {
    static MISSING_WARNED: Cell<bool> = Cell::new(false);
}

fn confetti_function() -> Option<Function> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(CONFETTI_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    value.dyn_into::<Function>().ok()
}

pub(crate) fn is_available() -> bool {
    confetti_function().is_some()
}

/// Renders one burst through the page's particle library.
pub(crate) fn fire(burst: &BurstConfig) {
    let Some(func) = confetti_function() else {
        let already_warned = MISSING_WARNED.with(|flag| flag.replace(true));
        if !already_warned {
            console::warn!("confetti: window.confetti is not available");
        }
        return;
    };
    let options = match serde_wasm_bindgen::to_value(burst) {
        Ok(options) => options,
        Err(err) => {
            console::warn!("confetti: options encode failed", err.to_string());
            return;
        }
    };
    if let Err(err) = func.call1(&JsValue::NULL, &options) {
        console::warn!("confetti: burst failed", err);
    }
}
