use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::OrderedRankMap;
use crate::Rank;

impl<K, V> OrderedRankMap<K, V> {
    /// Returns the value of the entry at 1-based position `rank` in key order.
    ///
    /// Returns `None` when `rank` is 0 or greater than [`len`](Self::len).
    ///
    /// # Complexity
    ///
    /// O(log n) expected
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let mut map = OrderedRankMap::new();
    /// map.insert("a", 10);
    /// map.insert("c", 30);
    /// map.insert("b", 20);
    ///
    /// assert_eq!(map.find_by_rank(2), Some(&20));
    /// assert_eq!(map.find_by_rank(0), None);
    /// assert_eq!(map.find_by_rank(4), None);
    /// ```
    #[must_use]
    pub fn find_by_rank(&self, rank: usize) -> Option<&V> {
        self.get_by_rank(rank).map(|(_, value)| value)
    }

    /// Returns the key-value pair at 1-based position `rank` in key order.
    ///
    /// # Complexity
    ///
    /// O(log n) expected
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(30, 'c'), (10, 'a'), (20, 'b')]);
    /// assert_eq!(map.get_by_rank(1), Some((&10, &'a')));
    /// assert!(map.get_by_rank(4).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.get_by_rank(rank)
    }

    /// Returns the key and a mutable reference to the value at 1-based
    /// position `rank`.
    ///
    /// The key is returned as a shared reference because mutating it would
    /// break the map's ordering.
    ///
    /// # Complexity
    ///
    /// O(log n) expected
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let mut map = OrderedRankMap::new();
    /// map.insert(10, "a");
    /// map.insert(5, "b");
    ///
    /// if let Some((key, value)) = map.get_by_rank_mut(1) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    /// assert_eq!(map.find(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.get_by_rank_mut(rank)
    }

    /// Returns the 1-based rank of `key`, or 0 if the key is not present.
    ///
    /// Valid ranks start at 1, so 0 is free to mean "absent". Prefer
    /// [`rank_of`](Self::rank_of) when an `Option` reads better.
    ///
    /// # Complexity
    ///
    /// O(log n) expected
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(10, "a"), (20, "b")]);
    /// assert_eq!(map.get_rank(&20), 2);
    /// assert_eq!(map.get_rank(&15), 0);
    /// ```
    #[must_use]
    pub fn get_rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.rank_of(key).unwrap_or(0)
    }

    /// Returns the 1-based rank of `key`, or `None` if the key is not present.
    ///
    /// # Complexity
    ///
    /// O(log n) expected
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([("x", 1), ("y", 2)]);
    /// assert_eq!(map.rank_of("x"), Some(1));
    /// assert_eq!(map.rank_of("z"), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is 0 or greater than the map's length.
///
/// # Examples
///
/// ```
/// use ordered_rank_map::{OrderedRankMap, Rank};
///
/// let map = OrderedRankMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(map[Rank(2)], 2);
/// ```
impl<K, V> Index<Rank> for OrderedRankMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.find_by_rank(rank.0).expect("rank out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is 0 or greater than the map's length.
///
/// # Examples
///
/// ```
/// use ordered_rank_map::{OrderedRankMap, Rank};
///
/// let mut map = OrderedRankMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
/// assert_eq!(map.find(&"a"), Some(&5));
/// ```
impl<K, V> IndexMut<Rank> for OrderedRankMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, value)| value).expect("rank out of bounds")
    }
}
