use core::fmt;

/// The error returned by [`try_insert`](crate::OrderedRankMap::try_insert) when
/// the key is already present.
///
/// Carries the rejected value back to the caller together with the entry that
/// is already stored under the key.
///
/// # Examples
///
/// ```
/// use ordered_rank_map::OrderedRankMap;
///
/// let mut map = OrderedRankMap::new();
/// assert_eq!(map.try_insert(37, "a").unwrap(), &"a");
///
/// let err = map.try_insert(37, "b").unwrap_err();
/// assert_eq!(*err.key, 37);
/// assert_eq!(*err.stored, "a");
/// assert_eq!(err.value, "b");
/// ```
pub struct OccupiedError<'a, K: 'a, V: 'a> {
    /// The key already present in the map.
    pub key: &'a K,
    /// The value stored under `key`.
    pub stored: &'a mut V,
    /// The value that was not inserted.
    pub value: V,
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OccupiedError<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupiedError")
            .field("key", self.key)
            .field("stored", self.stored)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Display for OccupiedError<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to insert {:?}, key {:?} already exists with value {:?}",
            self.value, self.key, self.stored,
        )
    }
}

impl<K: fmt::Debug, V: fmt::Debug> core::error::Error for OccupiedError<'_, K, V> {}
