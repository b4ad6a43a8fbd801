pub mod audio;
pub mod config_check;
pub mod confetti;
pub mod evasion;
pub mod page;
pub mod random;
pub mod signature;
pub mod stage;
pub mod wheel;

pub use audio::{AudioGate, MuteChange, SoundEffect, BACKGROUND_MUSIC_ID};
pub use config_check::ConfigError;
pub use confetti::{BurstConfig, BurstOrigin, ConfettiSchedule, ConfettiTick};
pub use evasion::{Evasion, EvasionOutcome, Placement, Viewport};
pub use page::{AudioSources, PageConfig, PAGE_CONFIG};
pub use random::{SplitMix64, UnitRandom};
pub use signature::{SignaturePad, StrokeStep, SurfacePoint};
pub use stage::{Stage, StageNavigator, StageTicket};
pub use wheel::{SpinPlan, Wheel};
