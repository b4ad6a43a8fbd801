use kokuhaku_core::UnitRandom;

/// Browser `Math.random()`.
pub(crate) struct MathRandom;

impl UnitRandom for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
