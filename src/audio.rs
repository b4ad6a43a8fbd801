use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo::console;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

use kokuhaku_core::{AudioGate, MuteChange, SoundEffect, BACKGROUND_MUSIC_ID};

thread_local! {
    static MISSING_WARNED: RefCell<HashSet<&'static str>> = RefCell::new(HashSet::new());
}

#[cfg(test)]
thread_local! {
    static PLAYED_TEST_LOG: RefCell<Vec<SoundEffect>> = RefCell::new(Vec::new());
}

#[cfg(test)]
pub(crate) fn take_played() -> Vec<SoundEffect> {
    PLAYED_TEST_LOG.with(|log| std::mem::take(&mut *log.borrow_mut()))
}

/// Returns true the first time `id` is reported missing.
fn warn_missing_once(id: &'static str) -> bool {
    let first = MISSING_WARNED.with(|warned| warned.borrow_mut().insert(id));
    if first {
        console::warn!("audio: missing element", id);
    }
    first
}

/// Shared handle to the session's mute flag, handed to every stage.
#[derive(Clone)]
pub(crate) struct SoundBoard {
    gate: Rc<RefCell<AudioGate>>,
}

impl PartialEq for SoundBoard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.gate, &other.gate)
    }
}

impl SoundBoard {
    pub(crate) fn new(muted: bool) -> Self {
        Self {
            gate: Rc::new(RefCell::new(AudioGate::new(muted))),
        }
    }

    pub(crate) fn is_muted(&self) -> bool {
        self.gate.borrow().is_muted()
    }

    pub(crate) fn indicator(&self) -> &'static str {
        self.gate.borrow().indicator()
    }

    pub(crate) fn play(&self, effect: SoundEffect) {
        #[cfg(test)]
        PLAYED_TEST_LOG.with(|log| log.borrow_mut().push(effect));
        if !self.gate.borrow().allows(effect) {
            return;
        }
        let Some(audio) = audio_element(effect.element_id()) else {
            warn_missing_once(effect.element_id());
            return;
        };
        audio.set_current_time(0.0);
        start_playback(&audio, effect.label());
    }

    pub(crate) fn toggle(&self) {
        let change = self.gate.borrow_mut().toggle();
        apply_mute_change(change);
    }

    /// Marks the background track as looping and starts it when the page opens unmuted.
    pub(crate) fn prepare_background(&self) {
        let Some(music) = audio_element(BACKGROUND_MUSIC_ID) else {
            return;
        };
        music.set_loop(true);
        if !self.is_muted() {
            start_playback(&music, "background");
        }
    }
}

fn audio_element(id: &str) -> Option<HtmlAudioElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

fn apply_mute_change(change: MuteChange) {
    let Some(music) = audio_element(BACKGROUND_MUSIC_ID) else {
        warn_missing_once(BACKGROUND_MUSIC_ID);
        return;
    };
    match change {
        MuteChange::StartBackground => start_playback(&music, "background"),
        MuteChange::PauseBackground => {
            if let Err(err) = music.pause() {
                console::log!("audio: background pause failed", err);
            }
        }
    }
}

fn start_playback(audio: &HtmlAudioElement, label: &'static str) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                console::log!(
                    format!("audio: {label} prevented, user interaction needed first"),
                    err
                );
            }
        }),
        Err(err) => console::log!(format!("audio: {label} prevented"), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn muted_board_is_silent_without_elements() {
        let board = SoundBoard::new(true);
        for effect in SoundEffect::ALL {
            board.play(effect);
        }
        assert!(board.is_muted());
    }

    #[wasm_bindgen_test]
    fn toggle_flips_indicator() {
        let board = SoundBoard::new(true);
        let muted_glyph = board.indicator();
        board.toggle();
        assert!(!board.is_muted());
        assert_ne!(board.indicator(), muted_glyph);
        board.toggle();
        assert_eq!(board.indicator(), muted_glyph);
    }

    #[wasm_bindgen_test]
    fn missing_element_warns_once_per_id() {
        let id = SoundEffect::Woosh.element_id();
        let board = SoundBoard::new(false);
        board.play(SoundEffect::Woosh);
        board.play(SoundEffect::Woosh);
        if audio_element(id).is_none() {
            assert!(MISSING_WARNED.with(|warned| warned.borrow().contains(id)));
            assert!(!warn_missing_once(id));
        }
        assert!(warn_missing_once("sfx-never-rendered"));
        assert!(!warn_missing_once("sfx-never-rendered"));
    }

    #[wasm_bindgen_test]
    fn clones_share_the_gate() {
        let board = SoundBoard::new(true);
        let other = board.clone();
        other.toggle();
        assert!(!board.is_muted());
        assert!(board == other);
        assert!(board != SoundBoard::new(true));
    }
}
