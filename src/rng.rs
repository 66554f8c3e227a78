//! Random-source abstraction for the resolution pipeline.
//!
//! The engine consumes one logical random stream in a fixed call order
//! (stage order, then iteration order within each stage), so a seeded
//! source replays a resolution exactly. Tests inject [`ScriptedRandom`]
//! to pin individual draws.

use rand::Rng;

/// A source of uniform random draws for the resolution stages.
///
/// Blanket-implemented for every [`rand::Rng`], so the engine runs on
/// `SmallRng` in production and on scripted sequences in tests.
pub trait RandomSource {
    /// Returns a uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Returns a uniform integer in `[lo, hi)`.
    ///
    /// A degenerate range (`hi <= lo`) returns `lo` without consuming
    /// a draw.
    fn roll(&mut self, lo: u32, hi: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn roll(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..hi)
    }
}

/// A scripted random source replaying fixed sequences of draws.
///
/// `uniform()` pops from the front of the uniform queue and `roll()`
/// from the front of the roll queue. An exhausted queue falls back to
/// `0.0` (uniform) or `lo` (roll), which keeps partially scripted
/// scenarios deterministic.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    uniforms: Vec<f64>,
    rolls: Vec<u32>,
}

impl ScriptedRandom {
    /// Creates a scripted source from uniform and roll sequences.
    pub fn new(uniforms: Vec<f64>, rolls: Vec<u32>) -> Self {
        ScriptedRandom { uniforms, rolls }
    }

    /// Creates a scripted source with only uniform draws.
    pub fn uniforms(uniforms: Vec<f64>) -> Self {
        ScriptedRandom { uniforms, rolls: Vec::new() }
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f64 {
        if self.uniforms.is_empty() {
            return 0.0;
        }
        self.uniforms.remove(0)
    }

    fn roll(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        if self.rolls.is_empty() {
            return lo;
        }
        self.rolls.remove(0).clamp(lo, hi - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn small_rng_uniform_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let x = rng.uniform();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn small_rng_roll_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let n = rng.roll(1, 5);
            assert!((1..5).contains(&n));
        }
    }

    #[test]
    fn roll_degenerate_range_returns_lo() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(rng.roll(1, 1), 1);
        assert_eq!(rng.roll(3, 2), 3);
    }

    #[test]
    fn seeded_streams_replay() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
            assert_eq!(a.roll(0, 10), b.roll(0, 10));
        }
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut rng = ScriptedRandom::new(vec![0.25, 0.75], vec![2, 4]);
        assert_eq!(rng.uniform(), 0.25);
        assert_eq!(rng.roll(1, 10), 2);
        assert_eq!(rng.uniform(), 0.75);
        assert_eq!(rng.roll(1, 10), 4);
    }

    #[test]
    fn scripted_exhausted_falls_back() {
        let mut rng = ScriptedRandom::default();
        assert_eq!(rng.uniform(), 0.0);
        assert_eq!(rng.roll(1, 10), 1);
    }

    #[test]
    fn scripted_roll_clamps_to_range() {
        let mut rng = ScriptedRandom::new(vec![], vec![99]);
        assert_eq!(rng.roll(1, 5), 4);
    }
}
