// xorshift.rs - Reproducible xorshift128+ generator

use rand::{Rng, RngCore, SeedableRng};

/// Two-word xorshift128+ (shifts 23, 17, 26).
///
/// Fast and reproducible, which is all the seeded randomize needs. Not
/// suitable for anything security related.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift128Plus {
    x: u64,
    y: u64,
}

impl Xorshift128Plus {
    /// An all-zero state never leaves zero, so `(0, 0)` becomes `(u64::MAX, 0)`.
    pub fn new(x_seed: u64, y_seed: u64) -> Self {
        let x = if x_seed == 0 && y_seed == 0 { u64::MAX } else { x_seed };
        Self { x, y: y_seed }
    }

    /// Seeds both words from the thread RNG, redrawing until they differ.
    ///
    /// Distinctness is best effort: the loop almost surely runs once, but
    /// there is no hard bound on it.
    pub fn from_entropy() -> Self {
        let mut rng = rand::rng();
        let x: u64 = rng.random();
        let mut y = x;
        while y == x {
            y = rng.random();
        }
        Self { x, y }
    }
}

impl RngCore for Xorshift128Plus {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.x;
        let s0 = self.y;
        self.x = s0;
        s1 ^= s1 << 23;
        self.y = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.y.wrapping_add(s0)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Xorshift128Plus {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let (x, y) = seed.split_at(8);
        let mut x_bytes = [0u8; 8];
        let mut y_bytes = [0u8; 8];
        x_bytes.copy_from_slice(x);
        y_bytes.copy_from_slice(y);
        Self::new(u64::from_le_bytes(x_bytes), u64::from_le_bytes(y_bytes))
    }
}
