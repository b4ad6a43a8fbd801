use std::cell::RefCell;

use gloo::timers::callback::Interval;
use js_sys::Date;
use wasm_bindgen_futures::spawn_local;

use kokuhaku_core::confetti::CONFETTI_INTERVAL_MS;
use kokuhaku_core::{ConfettiSchedule, ConfettiTick};

use crate::confetti_bridge;
use crate::rng::MathRandom;

thread_local! {
    static CONFETTI_TIMER: RefCell<Option<Interval>> = RefCell::new(None);
}

/// Starts the victory confetti. A new call replaces a loop that is still running.
pub(crate) fn trigger_confetti() {
    let schedule = ConfettiSchedule::new(Date::now());
    if !confetti_bridge::is_available() {
        gloo::console::log!("confetti: renderer missing, bursts will be skipped");
    }
    let interval = Interval::new(CONFETTI_INTERVAL_MS, move || {
        match schedule.tick(Date::now(), &mut MathRandom) {
            ConfettiTick::Finished => stop(),
            ConfettiTick::Bursts(bursts) => {
                for burst in &bursts {
                    confetti_bridge::fire(burst);
                }
            }
        }
    });
    let previous = CONFETTI_TIMER.with(|slot| slot.borrow_mut().replace(interval));
    drop(previous);
}

pub(crate) fn is_running() -> bool {
    CONFETTI_TIMER.with(|slot| slot.borrow().is_some())
}

fn stop() {
    let Some(handle) = CONFETTI_TIMER.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    // Still inside the interval callback; release it once the tick returns.
    spawn_local(async move {
        drop(handle);
    });
}
