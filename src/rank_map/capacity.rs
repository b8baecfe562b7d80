use super::OrderedRankMap;
use crate::level::LevelGenerator;
use crate::raw::RawRankMap;

impl<K, V> OrderedRankMap<K, V> {
    /// Creates an empty map with capacity for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map: OrderedRankMap<i32, i32> = OrderedRankMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedRankMap {
            raw: RawRankMap::with_capacity(capacity),
        }
    }

    /// Creates an empty map whose node heights are drawn from `levels`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::{LevelGenerator, OrderedRankMap};
    ///
    /// // A flat list: every node is a single level tall.
    /// let mut map = OrderedRankMap::with_level_generator(LevelGenerator::new(1, 0.5));
    /// map.extend([(3, "c"), (1, "a"), (2, "b")]);
    /// assert_eq!(map.height(), 1);
    /// assert_eq!(map.get_rank(&3), 3);
    /// ```
    #[must_use]
    pub fn with_level_generator(levels: LevelGenerator) -> Self {
        OrderedRankMap {
            raw: RawRankMap::with_level_generator(levels),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the height policy used for new entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::{OrderedRankMap, MAX_LEVEL};
    ///
    /// let map: OrderedRankMap<u8, u8> = OrderedRankMap::new();
    /// assert_eq!(map.level_generator().max_level(), MAX_LEVEL);
    /// ```
    #[must_use]
    pub fn level_generator(&self) -> &LevelGenerator {
        self.raw.level_generator()
    }
}
