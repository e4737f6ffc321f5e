// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rand::{Rng, RngCore};

/// Source of randomness for generator tools.
///
/// Anything implementing [`rand::RngCore`] is a `RandomSource`, so production
/// code passes `rand::thread_rng()` and tests pass a seeded `StdRng`.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. Returns 0 when `bound` is 0.
    fn below(&mut self, bound: usize) -> usize;

    fn fill(&mut self, bytes: &mut [u8]);
}

impl<R: RngCore> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.gen_range(0..bound)
        }
    }

    fn fill(&mut self, bytes: &mut [u8]) {
        self.fill_bytes(bytes);
    }
}

/// Uniform integer in `[low, high]` (inclusive). Returns `low` when the
/// range is empty.
pub fn between(rng: &mut dyn RandomSource, low: i64, high: i64) -> i64 {
    if high <= low {
        return low;
    }
    let span = (high.saturating_sub(low) as u64).saturating_add(1) as usize;
    low.saturating_add(rng.below(span) as i64)
}

pub fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.below(items.len()))
    }
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_below_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rng.below(6) < 6);
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn test_between_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..2000 {
            let value = between(&mut rng, 1, 3);
            assert!((1..=3).contains(&value));
            seen_low |= value == 1;
            seen_high |= value == 3;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut items = vec![1, 2, 3, 4, 5, 6, 7, 8];
        shuffle(&mut rng, &mut items);
        items.sort();
        assert_eq!(items, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert!(pick(&mut rng, &empty).is_none());
    }
}
