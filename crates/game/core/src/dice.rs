//! Dice sources for check resolution.
//!
//! Every random draw in the rules engine goes through [`DiceSource`]. The
//! rules never look at where a face came from, so the same resolution code
//! runs against a seeded generator at the table and a scripted sequence in
//! tests.
//!
//! # Determinism
//!
//! [`PcgDice`] is deterministic: given the same seed it produces the same
//! sequence of faces. This makes sessions replayable from their seed.

use std::collections::VecDeque;

/// Source of uniformly distributed die faces.
pub trait DiceSource {
    /// Roll one die with `faces` sides, returning a value in `[1, faces]`.
    ///
    /// Callers guarantee `faces >= 1`.
    fn roll(&mut self, faces: u32) -> u32;

    /// Roll `count` independent dice with `faces` sides each.
    fn roll_many(&mut self, count: usize, faces: u32) -> Vec<u32> {
        (0..count).map(|_| self.roll(faces)).collect()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self, faces: u32) -> u32 {
        (**self).roll(faces)
    }
}

/// PCG dice (Permuted Congruential Generator, XSH-RR variant).
///
/// 64 bits of state, 32-bit output, single multiply + xorshift + rotate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgDice {
    state: u64,
}

impl PcgDice {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create dice seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl DiceSource for PcgDice {
    fn roll(&mut self, faces: u32) -> u32 {
        debug_assert!(faces >= 1, "die must have at least one face");
        (self.next_u32() % faces.max(1)) + 1
    }
}

/// Dice that replay a fixed list of faces, in order.
///
/// Each face is clamped into `[1, faces]` of the die being rolled so that a
/// script can never produce an impossible result. Once exhausted, further
/// rolls return the die's maximum face.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Faces not yet consumed.
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, faces: u32) -> u32 {
        let max = faces.max(1);
        self.faces.pop_front().unwrap_or(max).clamp(1, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let mut a = PcgDice::new(42);
        let mut b = PcgDice::new(42);
        for _ in 0..64 {
            assert_eq!(a.roll(20), b.roll(20));
        }
    }

    #[test]
    fn pcg_different_seeds_differ() {
        let mut a = PcgDice::new(1);
        let mut b = PcgDice::new(2);
        let left: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let right: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_ne!(left, right);
    }

    #[test]
    fn pcg_faces_stay_in_range() {
        let mut dice = PcgDice::new(7);
        for faces in [1, 6, 8, 10, 12, 20] {
            for _ in 0..200 {
                let face = dice.roll(faces);
                assert!((1..=faces).contains(&face));
            }
        }
    }

    #[test]
    fn pcg_covers_every_face() {
        let mut dice = PcgDice::new(99);
        let mut seen = [false; 6];
        for _ in 0..500 {
            seen[(dice.roll(6) - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn scripted_replays_then_maxes_out() {
        let mut dice = ScriptedDice::new([3, 25, 0]);
        assert_eq!(dice.roll(8), 3);
        assert_eq!(dice.roll(12), 12);
        assert_eq!(dice.roll(6), 1);
        assert_eq!(dice.remaining(), 0);
        assert_eq!(dice.roll(10), 10);
    }

    #[test]
    fn roll_many_through_mut_reference() {
        fn three_d20(mut dice: impl DiceSource) -> Vec<u32> {
            dice.roll_many(3, 20)
        }

        let mut dice = ScriptedDice::new([1, 2, 3, 4]);
        assert_eq!(three_d20(&mut dice), vec![1, 2, 3]);
        assert_eq!(dice.remaining(), 1);
    }
}
