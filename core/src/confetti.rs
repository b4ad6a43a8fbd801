use serde::Serialize;

use crate::UnitRandom;

pub const CONFETTI_DURATION_MS: f64 = 3000.0;
pub const CONFETTI_INTERVAL_MS: u32 = 250;
pub const CONFETTI_MAX_PARTICLES: f64 = 50.0;
pub const CONFETTI_START_VELOCITY: f64 = 30.0;
pub const CONFETTI_SPREAD_DEG: f64 = 360.0;
pub const CONFETTI_TICKS: u32 = 60;
pub const LEFT_ORIGIN_BAND: (f64, f64) = (0.1, 0.3);
pub const RIGHT_ORIGIN_BAND: (f64, f64) = (0.7, 0.9);
pub const ORIGIN_Y_OFFSET: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BurstOrigin {
    pub x: f64,
    pub y: f64,
}

/// Options object handed to the page's `confetti` function.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BurstConfig {
    pub start_velocity: f64,
    pub spread: f64,
    pub ticks: u32,
    pub z_index: i32,
    pub particle_count: f64,
    pub origin: BurstOrigin,
}

impl BurstConfig {
    fn new(particle_count: f64, origin: BurstOrigin) -> Self {
        Self {
            start_velocity: CONFETTI_START_VELOCITY,
            spread: CONFETTI_SPREAD_DEG,
            ticks: CONFETTI_TICKS,
            z_index: 0,
            particle_count,
            origin,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfettiTick {
    Finished,
    Bursts([BurstConfig; 2]),
}

/// Time-bounded emitter: two mirrored bursts per tick, thinning out to zero.
#[derive(Clone, Copy, Debug)]
pub struct ConfettiSchedule {
    end_ms: f64,
    duration_ms: f64,
}

impl ConfettiSchedule {
    pub fn new(start_ms: f64) -> Self {
        Self::with_duration(start_ms, CONFETTI_DURATION_MS)
    }

    pub fn with_duration(start_ms: f64, duration_ms: f64) -> Self {
        let duration_ms = duration_ms.max(1.0);
        Self {
            end_ms: start_ms + duration_ms,
            duration_ms,
        }
    }

    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }

    pub fn time_left(&self, now_ms: f64) -> f64 {
        self.end_ms - now_ms
    }

    pub fn particle_count(&self, now_ms: f64) -> f64 {
        let left = self.time_left(now_ms);
        if left <= 0.0 {
            return 0.0;
        }
        CONFETTI_MAX_PARTICLES * (left / self.duration_ms).min(1.0)
    }

    pub fn tick(&self, now_ms: f64, rng: &mut impl UnitRandom) -> ConfettiTick {
        if self.time_left(now_ms) <= 0.0 {
            return ConfettiTick::Finished;
        }
        let particle_count = self.particle_count(now_ms);
        let left = BurstOrigin {
            x: rng.next_range(LEFT_ORIGIN_BAND.0, LEFT_ORIGIN_BAND.1),
            y: rng.next_unit() - ORIGIN_Y_OFFSET,
        };
        let right = BurstOrigin {
            x: rng.next_range(RIGHT_ORIGIN_BAND.0, RIGHT_ORIGIN_BAND.1),
            y: rng.next_unit() - ORIGIN_Y_OFFSET,
        };
        ConfettiTick::Bursts([
            BurstConfig::new(particle_count, left),
            BurstConfig::new(particle_count, right),
        ])
    }
}
