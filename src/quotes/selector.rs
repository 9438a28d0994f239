//! Random quote selection without immediate repeats

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Mutable per-run state: the last shown quote and how many have been shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Index of the last selected quote (None = nothing shown yet)
    pub last_index: Option<usize>,

    /// Number of successful renders
    pub counter: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Draws quote indices, never returning the previous index twice in a row
/// when more than one quote exists.
#[derive(Debug)]
pub struct Selector<R: Rng = StdRng> {
    rng: R,
}

impl Selector<StdRng> {
    /// Selector seeded from OS entropy
    pub fn from_entropy() -> Self {
        Selector {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible selector
    pub fn seeded(seed: u64) -> Self {
        Selector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Selector<R> {
    pub fn with_rng(rng: R) -> Self {
        Selector { rng }
    }

    /// Pick the next index in `0..len` and record it in `session`.
    ///
    /// Rejection sampling: each draw is uniform over `0..len` and is redrawn
    /// only when it equals the previous index, so the result is uniform over
    /// the remaining `len - 1` indices. Terminates with probability 1.
    pub fn select_next(&mut self, len: usize, session: &mut Session) -> usize {
        let index = if len <= 1 {
            0
        } else {
            loop {
                let candidate = self.rng.gen_range(0..len);
                if Some(candidate) != session.last_index {
                    break candidate;
                }
            }
        };

        session.last_index = Some(index);
        index
    }
}
