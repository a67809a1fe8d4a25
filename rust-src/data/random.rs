//! Injectable random sources for record generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;


/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}


/// Adapter from any `rand` generator.
pub struct RngSource<R: Rng>(R);


impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}


impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}


/// ChaCha-backed source; seeded runs reproduce the same records.
pub fn source_from_seed(seed: Option<u64>) -> RngSource<ChaCha8Rng> {
    let rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    RngSource::new(rng)
}


/// Replays a fixed list of samples, cycling when exhausted.
#[cfg(test)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    position: usize,
}


#[cfg(test)]
impl ScriptedSource {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, position: 0 }
    }
}


#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.samples[self.position % self.samples.len()];
        self.position += 1;
        value
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_maps_unit_interval() {
        let mut source = ScriptedSource::new(vec![0.0, 0.5, 0.25]);
        assert_eq!(source.uniform(-5.0, 5.0), -5.0);
        assert_eq!(source.uniform(-5.0, 5.0), 0.0);
        assert_eq!(source.uniform(0.0, 1000.0), 250.0);
    }

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![0.1, 0.2]);
        let drawn: Vec<f64> = (0..4).map(|_| source.next_unit()).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.1, 0.2]);
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = source_from_seed(Some(42));
        let mut b = source_from_seed(Some(42));
        for _ in 0..16 {
            let sample = a.next_unit();
            assert!((0.0..1.0).contains(&sample));
            assert_eq!(sample, b.next_unit());
        }
    }
}
