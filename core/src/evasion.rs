pub const EVASION_THRESHOLD: u32 = 3;
pub const EVASION_FOOTPRINT_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Upper bounds for the control's top-left corner so it stays on screen.
    pub fn placement_bounds(&self) -> (f64, f64) {
        (
            (self.width - EVASION_FOOTPRINT_PX).max(0.0),
            (self.height - EVASION_FOOTPRINT_PX).max(0.0),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Flow,
    Fixed { left: f64, top: f64 },
}

impl Placement {
    pub fn style(&self) -> String {
        match self {
            Placement::Flow => "position: relative; left: auto; top: auto;".to_string(),
            Placement::Fixed { left, top } => {
                format!("position: fixed; left: {left}px; top: {top}px;")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EvasionOutcome {
    Relocate(Placement),
    Settle,
}

/// Counts dodges of the decline control; it becomes clickable at the threshold.
#[derive(Clone, Debug)]
pub struct Evasion {
    attempts: u32,
    threshold: u32,
}

impl Evasion {
    pub fn new(threshold: u32) -> Self {
        Self {
            attempts: 0,
            threshold: threshold.max(1),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn is_evading(&self) -> bool {
        self.attempts < self.threshold
    }

    pub fn is_clickable(&self) -> bool {
        !self.is_evading()
    }

    /// Relocates while evading. Settling happens on the first proximity event
    /// after the threshold is reached, not on the dodge that reaches it.
    pub fn on_proximity(
        &mut self,
        viewport: Viewport,
        rng: &mut impl crate::UnitRandom,
    ) -> EvasionOutcome {
        if !self.is_evading() {
            return EvasionOutcome::Settle;
        }
        let (max_left, max_top) = viewport.placement_bounds();
        let left = rng.next_unit() * max_left;
        let top = rng.next_unit() * max_top;
        self.attempts += 1;
        EvasionOutcome::Relocate(Placement::Fixed { left, top })
    }

    /// True when a click should advance the flow.
    pub fn on_click(&self) -> bool {
        self.is_clickable()
    }
}

impl Default for Evasion {
    fn default() -> Self {
        Self::new(EVASION_THRESHOLD)
    }
}
