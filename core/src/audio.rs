pub const BACKGROUND_MUSIC_ID: &str = "bg-music";
pub const MUTED_GLYPH: &str = "\u{1F507}";
pub const UNMUTED_GLYPH: &str = "\u{1F50A}";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Click,
    Woosh,
    Win,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Click, SoundEffect::Woosh, SoundEffect::Win];

    pub fn element_id(self) -> &'static str {
        match self {
            SoundEffect::Click => "sfx-click",
            SoundEffect::Woosh => "sfx-woosh",
            SoundEffect::Win => "sfx-win",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoundEffect::Click => "click",
            SoundEffect::Woosh => "woosh",
            SoundEffect::Win => "win",
        }
    }
}

/// What the background loop should do after a mute toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MuteChange {
    StartBackground,
    PauseBackground,
}

/// Session-wide mute flag shared by every sound trigger.
#[derive(Clone, Debug)]
pub struct AudioGate {
    muted: bool,
}

impl AudioGate {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle(&mut self) -> MuteChange {
        self.muted = !self.muted;
        if self.muted {
            MuteChange::PauseBackground
        } else {
            MuteChange::StartBackground
        }
    }

    pub fn allows(&self, _effect: SoundEffect) -> bool {
        !self.muted
    }

    pub fn indicator(&self) -> &'static str {
        if self.muted {
            MUTED_GLYPH
        } else {
            UNMUTED_GLYPH
        }
    }
}

impl Default for AudioGate {
    fn default() -> Self {
        Self::new(true)
    }
}
