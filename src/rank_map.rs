use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::OccupiedError;
use crate::raw::{Handle, IntoEntries, RawRankMap};

mod capacity;
mod order_statistic;

/// An ordered map with rank queries, based on a span-augmented [skip list].
///
/// Keys must implement [`Ord`]; entries are kept in key order. On top of the
/// usual dictionary operations the map answers both directions of the
/// order-statistic question in O(log n) expected time:
///
/// - [`get_rank`](OrderedRankMap::get_rank): the 1-based position of a key;
/// - [`find_by_rank`](OrderedRankMap::find_by_rank): the value at a position.
///
/// Unlike `BTreeMap::insert`, [`insert`](OrderedRankMap::insert) never
/// overwrites: a second insert of the same key leaves the map unchanged and
/// returns `false`. Use [`get_mut`](OrderedRankMap::get_mut) to update a value.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the map. The
/// resulting behavior is unspecified but will not be undefined behavior.
///
/// # Examples
///
/// ```
/// use ordered_rank_map::OrderedRankMap;
///
/// let mut scores = OrderedRankMap::new();
/// assert!(scores.insert(92, "Carol"));
/// assert!(scores.insert(85, "Bob"));
/// assert!(scores.insert(100, "Alice"));
/// assert!(!scores.insert(85, "Dave")); // already present
///
/// assert_eq!(scores.len(), 3);
/// assert_eq!(scores.find(&85), Some(&"Bob"));
/// assert_eq!(scores.get_rank(&92), 2);
/// assert_eq!(scores.find_by_rank(3), Some(&"Alice"));
///
/// scores.remove(&85);
/// assert_eq!(scores.get_rank(&92), 1);
/// ```
///
/// # Background
///
/// A skip list stacks several sorted linked lists. Level 0 links every entry;
/// each higher level links a random subset of the level below, so a search
/// starts at the sparse top level and drops down whenever the next key would
/// overshoot. Heights are drawn from a geometric distribution (see
/// [`LevelGenerator`](crate::LevelGenerator)), which keeps the expected number
/// of visited nodes logarithmic without any rebalancing.
///
/// Every forward link additionally records its *span*: how many level-0
/// entries it steps over. The rank of a key is the sum of the spans crossed
/// while searching for it, and finding an entry by rank is the same descent
/// driven by the running span total instead of by key comparisons.
///
/// Nodes live in an arena and refer to each other by index, so the map owns
/// all of its entries directly and removal frees them immediately.
///
/// [skip list]: https://en.wikipedia.org/wiki/Skip_list
pub struct OrderedRankMap<K, V> {
    raw: RawRankMap<K, V>,
}

/// An iterator over the entries of an `OrderedRankMap`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedRankMap`].
///
/// [`iter`]: OrderedRankMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    raw: &'a RawRankMap<K, V>,
    next: Option<Handle>,
    remaining: usize,
}

/// An iterator over the keys of an `OrderedRankMap`, in order.
///
/// This `struct` is created by the [`keys`] method on [`OrderedRankMap`].
///
/// [`keys`]: OrderedRankMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `OrderedRankMap`, in key order.
///
/// This `struct` is created by the [`values`] method on [`OrderedRankMap`].
///
/// [`values`]: OrderedRankMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An owning iterator over the entries of an `OrderedRankMap`, in key order.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedRankMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: IntoEntries<K, V>,
}

/// An owning iterator over the keys of an `OrderedRankMap`, in order.
///
/// This `struct` is created by the [`into_keys`] method on [`OrderedRankMap`].
///
/// [`into_keys`]: OrderedRankMap::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K, V> {
    inner: IntoIter<K, V>,
}

/// An owning iterator over the values of an `OrderedRankMap`, in key order.
///
/// This `struct` is created by the [`into_values`] method on [`OrderedRankMap`].
///
/// [`into_values`]: OrderedRankMap::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<K, V> {
    inner: IntoIter<K, V>,
}

impl<K, V> OrderedRankMap<K, V> {
    /// Makes a new, empty `OrderedRankMap` with the default height policy.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let mut map = OrderedRankMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    pub fn new() -> OrderedRankMap<K, V> {
        OrderedRankMap { raw: RawRankMap::new() }
    }

    /// Clears the map, removing all entries.
    ///
    /// The height policy, including its random state, is kept.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let mut a = OrderedRankMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.height(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Inserts a key-value pair if the key is not already present.
    ///
    /// Returns `true` if the entry was added. If the map already holds `key`,
    /// nothing changes (the stored value is kept) and `false` is returned.
    ///
    /// # Panics
    ///
    /// Panics if the map already holds `u32::MAX - 1` entries. The map is left
    /// unchanged.
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
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map.find(&37), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        self.raw.insert(key, value).is_ok()
    }

    /// Inserts a key-value pair if the key is not already present, returning
    /// a mutable reference to the inserted value.
    ///
    /// # Errors
    ///
    /// If the key is present, the map is unchanged and an [`OccupiedError`]
    /// holding the stored entry and the rejected value is returned.
    ///
    /// # Panics
    ///
    /// Panics under the same capacity limit as [`insert`](Self::insert).
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
    /// *map.try_insert(1, 10).unwrap() += 1;
    /// assert_eq!(map.find(&1), Some(&11));
    ///
    /// let err = map.try_insert(1, 20).unwrap_err();
    /// assert_eq!(err.value, 20);
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<&mut V, OccupiedError<'_, K, V>>
    where
        K: Ord,
    {
        match self.raw.insert(key, value) {
            Ok(handle) => Ok(self.raw.entry_mut(handle).1),
            Err((handle, value)) => {
                let (key, stored) = self.raw.entry_mut(handle);
                Err(OccupiedError { key, stored, value })
            }
        }
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Removing an absent key is a no-op.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
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
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present.
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
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
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
    /// map.insert(1, "a");
    /// assert_eq!(map.find(&1), Some(&"a"));
    /// assert_eq!(map.find(&2), None);
    /// ```
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns the stored key and its value for the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(String::from("k"), 1)]);
    /// assert_eq!(map.get_key_value("k"), Some((&String::from("k"), &1)));
    /// assert_eq!(map.get_key_value("j"), None);
    /// ```
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let mut map = OrderedRankMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(1, "a")]);
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.first_key_value(), Some((&1, &"a")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|handle| self.raw.entry(handle))
    }

    /// Returns the entry with the largest key.
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
    /// let map = OrderedRankMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.last_key_value(), Some((&2, &"b")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|handle| self.raw.entry(handle))
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let entries: Vec<_> = map.iter().collect();
    /// assert_eq!(entries, [(&1, &"a"), (&2, &"b"), (&3, &"c")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            raw: &self.raw,
            next: self.raw.first(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<_> = map.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Creates a consuming iterator visiting all the keys, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<i32> = map.into_keys().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Creates a consuming iterator visiting all the values, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = map.into_values().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let mut a = OrderedRankMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of levels currently in use.
    ///
    /// This is 1 for an empty map and never exceeds the tallest node.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn height(&self) -> usize {
        self.raw.height()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedRankMap<K, V> {
    fn clone(&self) -> Self {
        OrderedRankMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for OrderedRankMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedRankMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedRankMap<K, V> {}

impl<K: PartialOrd, V: PartialOrd> PartialOrd for OrderedRankMap<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for OrderedRankMap<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedRankMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedRankMap<K, V> {
    fn default() -> Self {
        OrderedRankMap::new()
    }
}

/// Later duplicates of a key are ignored: the first value wins.
impl<K: Ord, V> FromIterator<(K, V)> for OrderedRankMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedRankMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedRankMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for OrderedRankMap<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedRankMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedRankMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedRankMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_rank_map::OrderedRankMap;
    ///
    /// let map = OrderedRankMap::from([(2, "b"), (1, "a")]);
    /// let entries: Vec<_> = map.into_iter().collect();
    /// assert_eq!(entries, [(1, "a"), (2, "b")]);
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.into_entries(),
        }
    }
}

/// Looks up a value by key.
///
/// # Panics
///
/// Panics if the key is not present in the map.
impl<K, Q, V> Index<&Q> for OrderedRankMap<K, V>
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.find(key).expect("no entry found for key")
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        self.next = self.raw.next(handle);
        self.remaining -= 1;
        Some(self.raw.entry(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.remaining()).finish()
    }
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for IntoKeys<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.remaining().map(|(k, _)| k)).finish()
    }
}

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoValues<K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for IntoValues<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.inner.remaining().map(|(_, v)| v)).finish()
    }
}
