//! The single deterministic random stream.
//!
//! # Determinism strategy
//!
//! All planner randomness (axis-order coin flips, item draws, dodge
//! directions) comes from one `SmallRng` seeded once per run.  The scheduler
//! processes robots in ascending id order, so the sequence of draws — and
//! therefore the whole plan — is a pure function of (seed, inputs).  Nothing
//! else in the simulator consumes randomness.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Run-level deterministic RNG.  Threaded explicitly through planner calls;
/// never cloned, so there is exactly one draw order per run.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A fair coin flip.
    #[inline]
    pub fn coin(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a uniformly random element of a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
