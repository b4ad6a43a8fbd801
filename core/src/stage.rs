pub const STAGE_TRANSITION_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Ask,
    Sign,
    Spin,
    Victory,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Ask, Stage::Sign, Stage::Spin, Stage::Victory];

    pub fn id(self) -> &'static str {
        match self {
            Stage::Ask => "stage-1",
            Stage::Sign => "stage-2",
            Stage::Spin => "stage-3",
            Stage::Victory => "stage-4",
        }
    }

    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Ask => Some(Stage::Sign),
            Stage::Sign => Some(Stage::Spin),
            Stage::Spin => Some(Stage::Victory),
            Stage::Victory => None,
        }
    }
}

/// Handle for a pending activation; only the newest one can commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageTicket {
    stage: Stage,
    generation: u64,
}

impl StageTicket {
    pub fn stage(&self) -> Stage {
        self.stage
    }
}

/// Tracks which panel is visible. `show` blanks every panel and hands out a
/// ticket; the caller commits it once the transition delay has elapsed.
#[derive(Clone, Debug)]
pub struct StageNavigator {
    active: Option<Stage>,
    generation: u64,
}

impl StageNavigator {
    pub fn new(initial: Stage) -> Self {
        Self {
            active: Some(initial),
            generation: 0,
        }
    }

    pub fn active(&self) -> Option<Stage> {
        self.active
    }

    pub fn is_active(&self, stage: Stage) -> bool {
        self.active == Some(stage)
    }

    pub fn show(&mut self, stage: Stage) -> StageTicket {
        self.active = None;
        self.generation = self.generation.wrapping_add(1);
        StageTicket {
            stage,
            generation: self.generation,
        }
    }

    pub fn commit(&mut self, ticket: StageTicket) -> Option<Stage> {
        if ticket.generation != self.generation {
            return None;
        }
        self.active = Some(ticket.stage);
        self.active
    }
}

impl Default for StageNavigator {
    fn default() -> Self {
        Self::new(Stage::Ask)
    }
}
