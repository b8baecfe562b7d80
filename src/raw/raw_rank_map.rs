use core::borrow::Borrow;
use core::cmp::Ordering;

use log::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Link, SkipNode};
use crate::level::{LevelGenerator, MAX_LEVEL};

/// A position in the list: `None` is the sentinel head, `Some` a stored node.
type Cursor = Option<Handle>;

/// Per-level predecessors of a search key, recorded on the way down.
struct Path {
    /// The last position at each level whose key is less than the search key.
    prev: [Cursor; MAX_LEVEL],
    /// The 1-based rank of `prev[level]` (0 for the head).
    rank: [usize; MAX_LEVEL],
}

/// The span-augmented skip list backing `OrderedRankMap`.
#[derive(Clone)]
pub(crate) struct RawRankMap<K, V> {
    /// Arena storing all nodes (key plus tower of links).
    nodes: Arena<SkipNode<K>>,
    /// Arena storing all values, addressed from the nodes.
    values: Arena<V>,
    /// Links of the sentinel head. Levels at or above `height` are empty.
    head: [Link; MAX_LEVEL],
    /// Number of levels currently in use.
    height: usize,
    /// Total number of key-value pairs.
    len: usize,
    /// Height policy for new nodes.
    levels: LevelGenerator,
}

impl<K, V> RawRankMap<K, V> {
    /// Creates a new, empty list with the default height policy.
    pub(crate) fn new() -> Self {
        Self::with_level_generator(LevelGenerator::default())
    }

    /// Creates a new, empty list drawing node heights from `levels`.
    pub(crate) fn with_level_generator(levels: LevelGenerator) -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            head: [Link::EMPTY; MAX_LEVEL],
            height: 1,
            len: 0,
            levels,
        }
    }

    /// Creates a new, empty list with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            values: Arena::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity()
    }

    pub(crate) fn level_generator(&self) -> &LevelGenerator {
        &self.levels
    }

    /// Removes every entry and resets the head, keeping the height policy.
    pub(crate) fn clear(&mut self) {
        trace!("clearing skip list: len {}, height {}", self.len, self.height);
        self.nodes.clear();
        self.values.clear();
        self.head = [Link::EMPTY; MAX_LEVEL];
        self.height = 1;
        self.len = 0;
    }

    /// Consumes the list into an iterator that moves entries out in key order.
    pub(crate) fn into_entries(self) -> IntoEntries<K, V> {
        IntoEntries {
            front: self.first(),
            raw: self,
        }
    }

    #[inline]
    fn link(&self, at: Cursor, level: usize) -> Link {
        match at {
            None => self.head[level],
            Some(handle) => self.nodes.get(handle).link(level),
        }
    }

    #[inline]
    fn link_mut(&mut self, at: Cursor, level: usize) -> &mut Link {
        match at {
            None => &mut self.head[level],
            Some(handle) => self.nodes.get_mut(handle).link_mut(level),
        }
    }

    /// The first node in key order.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.head[0].forward()
    }

    /// The node following `handle` in key order.
    pub(crate) fn next(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).link(0).forward()
    }

    /// The last node in key order, found by running each level to its tail.
    pub(crate) fn last(&self) -> Option<Handle> {
        let mut cursor = None;
        for level in (0..self.height).rev() {
            while let Some(next) = self.link(cursor, level).forward() {
                cursor = Some(next);
            }
        }
        cursor
    }

    pub(crate) fn key(&self, handle: Handle) -> &K {
        self.nodes.get(handle).key()
    }

    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (node.key(), self.values.get(node.value()))
    }

    pub(crate) fn entry_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        // Disjoint fields: the key lives in `nodes`, the value in `values`.
        let node = self.nodes.get(handle);
        (node.key(), self.values.get_mut(node.value()))
    }

    fn cmp_key<Q>(&self, handle: Handle, key: &Q) -> Ordering
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let stored: &Q = self.key(handle).borrow();
        stored.cmp(key)
    }

    /// Walks from the top level down, advancing while the next key is less
    /// than `key`. `visit(level, cursor, traversed)` is called once per level
    /// with the position reached and its rank.
    fn descend<Q, F>(&self, key: &Q, mut visit: F) -> (Cursor, usize)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
        F: FnMut(usize, Cursor, usize),
    {
        let mut cursor = None;
        let mut traversed = 0;

        for level in (0..self.height).rev() {
            loop {
                let link = self.link(cursor, level);
                match link.forward() {
                    Some(next) if self.cmp_key(next, key) == Ordering::Less => {
                        traversed += link.span();
                        cursor = Some(next);
                    }
                    _ => break,
                }
            }
            visit(level, cursor, traversed);
        }

        (cursor, traversed)
    }

    fn path_to<Q>(&self, key: &Q) -> Path
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut path = Path {
            prev: [None; MAX_LEVEL],
            rank: [0; MAX_LEVEL],
        };
        self.descend(key, |level, cursor, traversed| {
            path.prev[level] = cursor;
            path.rank[level] = traversed;
        });
        path
    }

    /// The level-0 successor of `prev`, if its key equals `key`.
    fn matching_successor<Q>(&self, prev: Cursor, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let next = self.link(prev, 0).forward()?;
        (self.cmp_key(next, key) == Ordering::Equal).then_some(next)
    }

    /// Searches for a key and returns its node if present.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (prev, _) = self.descend(key, |_, _, _| {});
        self.matching_successor(prev, key)
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.entry(handle).1)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.entry(handle))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.entry_mut(handle).1)
    }

    /// Returns the 1-based rank of `key`, summing the spans of every link
    /// crossed on the way down.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (prev, traversed) = self.descend(key, |_, _, _| {});
        self.matching_successor(prev, key)?;
        Some(traversed + self.link(prev, 0).span())
    }

    /// Finds the node at 1-based `rank`.
    ///
    /// Only the final level-0 position is checked against `rank`: spans always
    /// sum to entry boundaries, so the descent cannot stop short of a valid
    /// rank. Ranks of 0 or past the end fall through to `None`.
    pub(crate) fn select(&self, rank: usize) -> Option<Handle> {
        let mut cursor = None;
        let mut traversed = 0;

        for level in (0..self.height).rev() {
            loop {
                let link = self.link(cursor, level);
                match link.forward() {
                    Some(next) if traversed + link.span() < rank => {
                        traversed += link.span();
                        cursor = Some(next);
                    }
                    _ => break,
                }
            }
        }

        let base = self.link(cursor, 0);
        base.forward().filter(|_| traversed + base.span() == rank)
    }

    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.select(rank).map(|handle| self.entry(handle))
    }

    pub(crate) fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let handle = self.select(rank)?;
        Some(self.entry_mut(handle))
    }

    /// Inserts `key` if absent and returns its new node.
    ///
    /// When the key is already present nothing changes; the existing node and
    /// the rejected value are handed back.
    ///
    /// # Panics
    ///
    /// Panics, leaving the list unchanged, if it already holds `Handle::MAX`
    /// entries.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Result<Handle, (Handle, V)>
    where
        K: Ord,
    {
        let mut path = self.path_to(&key);
        if let Some(existing) = self.matching_successor(path.prev[0], &key) {
            return Err((existing, value));
        }

        // Nothing may change before this point: a full map must be left intact.
        assert!(
            self.nodes.has_room() && self.values.has_room(),
            "`RawRankMap::insert()` - map is at maximum capacity ({})",
            Handle::MAX
        );

        let height = self.levels.random();
        let value = self.values.alloc(value);
        let node = self.nodes.alloc(SkipNode::new(key, value, height));

        if height > self.height {
            // The new levels hold no entries yet, so the head's tail link spans all of them.
            for level in self.height..height {
                path.prev[level] = None;
                path.rank[level] = 0;
                self.head[level].set_span(self.len);
            }
            trace!("raising skip list height from {} to {height} at len {}", self.height, self.len);
            self.height = height;
        }

        for level in 0..height {
            let prev = path.prev[level];
            let before = self.link(prev, level);
            // Entries between `prev` and the new node at this level.
            let advanced = path.rank[0] - path.rank[level];

            *self.nodes.get_mut(node).link_mut(level) = Link::new(before.forward(), before.span() - advanced);
            *self.link_mut(prev, level) = Link::new(Some(node), advanced + 1);
        }

        for level in height..self.height {
            self.link_mut(path.prev[level], level).widen();
        }

        self.len += 1;
        Ok(node)
    }

    /// Unlinks `key`, returning the stored key and value.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let path = self.path_to(key);
        let target = self.matching_successor(path.prev[0], key)?;

        for level in 0..self.height {
            let prev = path.prev[level];
            let link = self.link(prev, level);
            if link.forward() == Some(target) {
                let removed = self.nodes.get(target).link(level);
                *self.link_mut(prev, level) = Link::new(removed.forward(), link.span() + removed.span() - 1);
            } else {
                self.link_mut(prev, level).narrow();
            }
        }

        self.shrink();
        self.len -= 1;

        let (key, value) = self.nodes.take(target).into_parts();
        Some((key, self.values.take(value)))
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Drops empty levels off the top of the list.
    fn shrink(&mut self) {
        let before = self.height;
        while self.height > 1 && self.head[self.height - 1].forward().is_none() {
            self.height -= 1;
            self.head[self.height] = Link::EMPTY;
        }
        if self.height != before {
            trace!("lowering skip list height from {before} to {}", self.height);
        }
    }
}

/// Owning cursor over a consumed list.
///
/// Each step takes the front node and its value out of their arenas, so only
/// entries not yet yielded stay allocated. Links above level 0 are never
/// followed again and may point at freed slots.
pub(crate) struct IntoEntries<K, V> {
    raw: RawRankMap<K, V>,
    front: Option<Handle>,
}

impl<K, V> IntoEntries<K, V> {
    /// Number of entries not yet yielded.
    pub(crate) const fn len(&self) -> usize {
        self.raw.len
    }

    /// The entries not yet yielded, in key order.
    pub(crate) fn remaining(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        let raw = &self.raw;
        core::iter::successors(self.front, move |&handle| raw.next(handle)).map(move |handle| raw.entry(handle))
    }
}

impl<K, V> Iterator for IntoEntries<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let handle = self.front?;
        let node = self.raw.nodes.take(handle);
        self.front = node.link(0).forward();
        self.raw.len -= 1;

        let (key, value) = node.into_parts();
        Some((key, self.raw.values.take(value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.len, Some(self.raw.len))
    }
}
