use nanorand::{Rng, WyRand};

/// Cosmetic randomness (particle jitter, wobble). Gameplay decisions
/// go through `rand::Rng` so tests can seed them.
pub struct Random {
    generator: WyRand,
}

impl Random {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn max(&mut self, max: f32) -> f32 {
        max * self.generator.generate::<f32>()
    }

    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.generator.generate::<f32>()
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
