//! Height policy for newly inserted skip list nodes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Hard cap on the height of any node, the sentinel head included.
///
/// `2^MAX_LEVEL` comfortably exceeds the largest entry count the map can hold.
pub const MAX_LEVEL: usize = 32;

/// Promotion probability used by [`LevelGenerator::default`].
pub const DEFAULT_PROBABILITY: f64 = 0.25;

/// Seed used when no seed is supplied and the `std` feature is off, leaving no
/// entropy source to draw one from.
#[cfg(not(feature = "std"))]
const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// The random source for a generator built without an explicit seed.
///
/// With the `std` feature each generator is seeded from the operating system,
/// so heights cannot be predicted from the insertion order alone.
#[cfg(feature = "std")]
fn unseeded_rng() -> SmallRng {
    SmallRng::from_os_rng()
}

#[cfg(not(feature = "std"))]
fn unseeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(DEFAULT_SEED)
}

/// Draws node heights from a geometric distribution.
///
/// Every node starts at height 1 and is promoted one level at a time with
/// probability `p`, up to `max_level`. With `p = 1/4` a node is on average
/// 1.33 levels tall and a search visits O(log n) nodes in expectation.
///
/// The expectation only holds while heights are independent of the keys. With
/// the default `std` feature, generators built by [`new`](Self::new) or
/// [`Default`] draw their seed from the operating system. Without it they all
/// share one fixed seed, and a caller who controls the insertion order can
/// degrade the list towards a linked list; pass a private seed to
/// [`with_seed`](Self::with_seed) in that setting.
///
/// # Examples
///
/// ```
/// use ordered_rank_map::{LevelGenerator, OrderedRankMap};
///
/// let levels = LevelGenerator::with_seed(16, 0.5, 42);
/// let mut map = OrderedRankMap::with_level_generator(levels);
/// map.insert("a", 1);
/// assert!(map.height() <= 16);
/// ```
#[derive(Clone, Debug)]
pub struct LevelGenerator {
    max_level: usize,
    p: f64,
    rng: SmallRng,
}

impl LevelGenerator {
    /// Creates a generator producing heights in `1..=max_level`, promoting with
    /// probability `p`.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= max_level <= MAX_LEVEL` and `0 < p < 1`.
    #[must_use]
    pub fn new(max_level: usize, p: f64) -> Self {
        Self::from_rng(max_level, p, unseeded_rng())
    }

    /// Like [`LevelGenerator::new`], seeding the random source with `seed`.
    ///
    /// Two generators with the same seed produce the same heights.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= max_level <= MAX_LEVEL` and `0 < p < 1`.
    #[must_use]
    pub fn with_seed(max_level: usize, p: f64, seed: u64) -> Self {
        Self::from_rng(max_level, p, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(max_level: usize, p: f64, rng: SmallRng) -> Self {
        assert!(
            (1..=MAX_LEVEL).contains(&max_level),
            "`LevelGenerator::new()` - `max_level` must be in 1..={MAX_LEVEL}, got {max_level}"
        );
        assert!(p > 0.0 && p < 1.0, "`LevelGenerator::new()` - `p` must be in (0, 1), got {p}");
        Self { max_level, p, rng }
    }

    /// The tallest height this generator produces.
    #[must_use]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// The per-level promotion probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.p
    }

    /// Draws the height of the next node.
    pub(crate) fn random(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_level && self.rng.random_bool(self.p) {
            height += 1;
        }
        height
    }
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self::new(MAX_LEVEL, DEFAULT_PROBABILITY)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_policy() {
        let levels = LevelGenerator::default();
        assert_eq!(levels.max_level(), MAX_LEVEL);
        assert!((levels.probability() - DEFAULT_PROBABILITY).abs() < f64::EPSILON);
    }

    #[test]
    fn single_level_generator_is_flat() {
        let mut levels = LevelGenerator::new(1, 0.9);
        for _ in 0..1_000 {
            assert_eq!(levels.random(), 1);
        }
    }

    #[test]
    fn same_seed_same_heights() {
        let mut a = LevelGenerator::with_seed(MAX_LEVEL, 0.5, 7);
        let mut b = LevelGenerator::with_seed(MAX_LEVEL, 0.5, 7);
        for _ in 0..1_000 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    #[cfg(feature = "std")]
    fn unseeded_generators_draw_independent_heights() {
        let mut a = LevelGenerator::default();
        let mut b = LevelGenerator::default();

        // Independent runs of 64 draws agree with probability below 1e-14.
        let a_heights: alloc::vec::Vec<usize> = (0..64).map(|_| a.random()).collect();
        let b_heights: alloc::vec::Vec<usize> = (0..64).map(|_| b.random()).collect();
        assert_ne!(a_heights, b_heights);

        let mut c = LevelGenerator::new(MAX_LEVEL, 0.5);
        let mut d = LevelGenerator::new(MAX_LEVEL, 0.5);
        let c_heights: alloc::vec::Vec<usize> = (0..64).map(|_| c.random()).collect();
        let d_heights: alloc::vec::Vec<usize> = (0..64).map(|_| d.random()).collect();
        assert_ne!(c_heights, d_heights);
    }

    #[test]
    #[cfg(not(feature = "std"))]
    fn unseeded_generators_share_the_fixed_seed() {
        let mut a = LevelGenerator::default();
        let mut b = LevelGenerator::with_seed(MAX_LEVEL, DEFAULT_PROBABILITY, DEFAULT_SEED);
        for _ in 0..1_000 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn heights_are_roughly_geometric() {
        const DRAWS: usize = 40_000;
        let mut levels = LevelGenerator::with_seed(MAX_LEVEL, 0.25, 1);
        let ones = (0..DRAWS).filter(|_| levels.random() == 1).count();

        // Expected share of height-1 nodes is 1 - p = 0.75.
        let share = ones as f64 / DRAWS as f64;
        assert!((0.72..0.78).contains(&share), "height-1 share was {share}");
    }

    #[test]
    #[should_panic(expected = "`max_level` must be in 1..=32")]
    fn zero_max_level_panics() {
        let _ = LevelGenerator::new(0, 0.5);
    }

    #[test]
    #[should_panic(expected = "`max_level` must be in 1..=32")]
    fn oversized_max_level_panics() {
        let _ = LevelGenerator::new(MAX_LEVEL + 1, 0.5);
    }

    #[test]
    #[should_panic(expected = "`p` must be in (0, 1)")]
    fn certain_promotion_panics() {
        let _ = LevelGenerator::new(MAX_LEVEL, 1.0);
    }

    proptest! {
        #[test]
        fn heights_stay_in_bounds(max_level in 1..=MAX_LEVEL, p in 0.01f64..0.99, seed in any::<u64>()) {
            let mut levels = LevelGenerator::with_seed(max_level, p, seed);
            for _ in 0..64 {
                let height = levels.random();
                prop_assert!((1..=max_level).contains(&height));
            }
        }
    }
}
