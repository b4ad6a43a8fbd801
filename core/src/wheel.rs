pub const MIN_SPIN_DEG: f64 = 1800.0;
pub const SPIN_RANGE_DEG: f64 = 360.0;
pub const SPIN_DURATION_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinPlan {
    pub rotation_deg: f64,
    pub settle_ms: u32,
}

impl SpinPlan {
    pub fn transform(&self) -> String {
        format!("transform: rotate({}deg);", self.rotation_deg)
    }
}

/// One-shot spinner. A second trigger in the same session yields nothing.
#[derive(Clone, Debug, Default)]
pub struct Wheel {
    spun: Option<SpinPlan>,
}

impl Wheel {
    pub fn new() -> Self {
        Self { spun: None }
    }

    pub fn is_spinning(&self) -> bool {
        self.spun.is_some()
    }

    pub fn rotation_deg(&self) -> f64 {
        self.spun.map(|plan| plan.rotation_deg).unwrap_or(0.0)
    }

    pub fn spin(&mut self, rng: &mut impl crate::UnitRandom) -> Option<SpinPlan> {
        if self.spun.is_some() {
            return None;
        }
        let extra = (rng.next_unit() * SPIN_RANGE_DEG).floor();
        let plan = SpinPlan {
            rotation_deg: MIN_SPIN_DEG + extra.min(SPIN_RANGE_DEG - 1.0),
            settle_ms: SPIN_DURATION_MS,
        };
        self.spun = Some(plan);
        Some(plan)
    }
}
