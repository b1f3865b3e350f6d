use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// Seedable random source. The only non-deterministic input of the game.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Fisher-Yates: for each position `i`, swap in a uniform pick from `i..len`.
    /// The input is left untouched.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        let len = out.len();
        for i in 0..len {
            let idx = self.rng.gen_range(i..len);
            out.swap(i, idx);
        }
        out
    }
}
