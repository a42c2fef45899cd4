//! Source d'aléa injectable (tirages uniformes dans `[0, 1)`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Prochain flottant uniforme dans `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

/// Adaptateur autour d'un générateur `rand`.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Générateur reproductible.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Rejoue une suite fixe de valeurs, en boucle. Pour les tests.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = (self.cursor + 1) % self.values.len();
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
