/// Source of uniform samples in `[0, 1)`.
pub trait UnitRandom {
    fn next_unit(&mut self) -> f64;

    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }
}

/// Deterministic generator for tests and replays.
#[derive(Clone, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

pub fn splitmix64(mut value: u64) -> u64 {
    value = value.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = value;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

impl UnitRandom for SplitMix64 {
    fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mixed = splitmix64(self.state);
        let top = mixed >> 11;
        top as f64 / ((1u64 << 53) as f64)
    }
}
