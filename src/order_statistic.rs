/// A one-based rank into the sorted order of a map.
///
/// `Rank(1)` is the entry with the smallest key. There is no entry at `Rank(0)`.
///
/// # Examples
///
/// ```
/// use ordered_rank_map::{OrderedRankMap, Rank};
///
/// let mut map = OrderedRankMap::new();
/// map.insert("b", 20);
/// map.insert("a", 10);
///
/// assert_eq!(map[Rank(1)], 10);
/// assert_eq!(map[Rank(2)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
