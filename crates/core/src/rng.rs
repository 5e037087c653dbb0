//! RNG module - seeded generator and bag-based pickers
//!
//! Two independent pickers draw from the engine's generator:
//!
//! - [`ShapePicker`]: classic bag. All seven shapes are shuffled onto a stack and
//!   popped until the stack is empty, then a new bag is shuffled.
//! - [`ColorPicker`]: same idea over palette indices `1..=9`, except that the last
//!   color on the stack is never popped. It stays resident and is left out of every
//!   refill, so bags after the first hold the eight other colors. A refill also never
//!   puts the previously drawn color on top, so no bag starts with the color the
//!   previous bag ended on.
//!
//! Also provides [`SimpleRng`], a small LCG that is the engine's default generator.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

use crate::types::{ShapeKind, COLOR_COUNT, SHAPE_COUNT};

const COLORS: usize = COLOR_COUNT as usize;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SimpleRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new((state ^ (state >> 32)) as u32)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Bag picker over the seven shape kinds
#[derive(Debug, Clone, Default)]
pub struct ShapePicker {
    stack: ArrayVec<ShapeKind, SHAPE_COUNT>,
}

impl ShapePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next shape, shuffling a fresh bag when the stack runs dry
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ShapeKind {
        loop {
            if let Some(kind) = self.stack.pop() {
                return kind;
            }
            self.refill(rng);
        }
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut bag = ShapeKind::ALL;
        bag.shuffle(rng);
        self.stack.extend(bag);
    }

    /// Shapes still on the stack, next draw last
    pub fn pending(&self) -> &[ShapeKind] {
        &self.stack
    }
}

/// Bag picker over palette indices `1..=COLOR_COUNT`
#[derive(Debug, Clone, Default)]
pub struct ColorPicker {
    stack: ArrayVec<u8, COLORS>,
    last: Option<u8>,
}

impl ColorPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next color index; never returns 0
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        loop {
            if self.stack.len() > 1 {
                if let Some(color) = self.stack.pop() {
                    self.last = Some(color);
                    return color;
                }
            }
            self.refill(rng);
        }
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut fill: ArrayVec<u8, COLORS> = (1..=COLOR_COUNT)
            .filter(|color| !self.stack.contains(color))
            .collect();
        fill.shuffle(rng);

        // The last pushed color is the first one drawn.
        let n = fill.len();
        if n > 1 && self.last.is_some() && fill.last().copied() == self.last {
            fill.swap(0, n - 1);
        }

        self.stack.extend(fill);
    }

    /// Colors still on the stack, next draw last
    pub fn pending(&self) -> &[u8] {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_seed_from_u64_matches_new_for_small_seeds() {
        let mut a = SimpleRng::seed_from_u64(42);
        let mut b = SimpleRng::new(42);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_fill_bytes_handles_partial_chunks() {
        let mut rng = SimpleRng::new(7);
        let mut buf = [0u8; 7];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_shape_picker_draws_all_seven() {
        let mut rng = SimpleRng::new(1);
        let mut picker = ShapePicker::new();

        let drawn: HashSet<ShapeKind> = (0..7).map(|_| picker.next(&mut rng)).collect();
        assert_eq!(drawn.len(), 7);
        assert!(picker.pending().is_empty());
    }

    #[test]
    fn test_color_picker_keeps_one_resident() {
        let mut rng = SimpleRng::new(1);
        let mut picker = ColorPicker::new();

        let first_bag: Vec<u8> = (0..8).map(|_| picker.next(&mut rng)).collect();
        assert_eq!(picker.pending().len(), 1);

        let resident = picker.pending()[0];
        assert!(!first_bag.contains(&resident));

        // The resident color is excluded from every later bag.
        for _ in 0..40 {
            assert_ne!(picker.next(&mut rng), resident);
        }
    }

    #[test]
    fn test_color_picker_avoids_bag_boundary_repeat_with_mock_rng() {
        // A constant generator shuffles every bag the same way, which would repeat
        // the boundary color without the swap in `refill`.
        let mut rng = StepRng::new(0, 0);
        let mut picker = ColorPicker::new();

        let draws: Vec<u8> = (0..32).map(|_| picker.next(&mut rng)).collect();
        for pair in draws.chunks(8).collect::<Vec<_>>().windows(2) {
            assert_ne!(pair[0][7], pair[1][0]);
        }
    }

    proptest! {
        #[test]
        fn shape_bags_are_permutations(seed in any::<u64>(), bags in 1usize..8) {
            let mut rng = SimpleRng::seed_from_u64(seed);
            let mut picker = ShapePicker::new();

            for _ in 0..bags {
                let bag: HashSet<ShapeKind> =
                    (0..SHAPE_COUNT).map(|_| picker.next(&mut rng)).collect();
                prop_assert_eq!(bag.len(), SHAPE_COUNT);
            }
        }

        #[test]
        fn color_bags_are_distinct_and_nonzero(seed in any::<u64>()) {
            let mut rng = SimpleRng::seed_from_u64(seed);
            let mut picker = ColorPicker::new();

            let draws: Vec<u8> = (0..8 * 6).map(|_| picker.next(&mut rng)).collect();
            prop_assert!(draws.iter().all(|&c| (1..=COLOR_COUNT).contains(&c)));

            let bags: Vec<&[u8]> = draws.chunks(8).collect();
            for bag in &bags {
                let unique: HashSet<u8> = bag.iter().copied().collect();
                prop_assert_eq!(unique.len(), bag.len());
            }
            for pair in bags.windows(2) {
                prop_assert_ne!(pair[0][7], pair[1][0]);
            }
        }
    }
}
