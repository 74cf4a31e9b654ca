//! Random light colours

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::scene::Color;

/// Picks a random colour on each call and falls back to white every
/// `reset_every` calls, restarting the count.
pub struct LightColorCycler {
    rng: ChaCha8Rng,
    counter: u32,
    reset_every: u32,
}

impl LightColorCycler {
    pub fn new(seed: u64, reset_every: u32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            counter: 0,
            reset_every: reset_every.max(1),
        }
    }

    /// Calls since the last reset
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn next_color(&mut self) -> Color {
        self.counter += 1;
        if self.counter == self.reset_every {
            self.counter = 0;
            return Color::WHITE;
        }
        Color::from_hex(self.rng.random_range(0..=0x00ff_ffff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fifth_call_is_white() {
        let mut colors = LightColorCycler::new(7, 5);
        for round in 0..3 {
            for _ in 0..4 {
                colors.next_color();
            }
            assert_eq!(colors.counter(), 4, "round {round}");
            assert_eq!(colors.next_color(), Color::WHITE);
            assert_eq!(colors.counter(), 0);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = LightColorCycler::new(42, 5);
        let mut b = LightColorCycler::new(42, 5);
        for _ in 0..12 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }
}
