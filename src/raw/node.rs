use smallvec::{SmallVec, smallvec};

use super::handle::Handle;
use super::span::Span;
use crate::level::MAX_LEVEL;

/// Levels stored inline before a node's tower spills to the heap.
const INLINE_LEVELS: usize = 4;

/// One forward link of a tower.
///
/// `span` is the number of rank positions the link advances. A tail link
/// (`forward == None`) spans the remaining entries after its owner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Link {
    forward: Option<Handle>,
    span: Span,
}

impl Link {
    pub(crate) const EMPTY: Self = Self {
        forward: None,
        span: Span::ZERO,
    };

    #[inline]
    pub(crate) const fn new(forward: Option<Handle>, span: usize) -> Self {
        Self {
            forward,
            span: Span::new(span),
        }
    }

    #[inline]
    pub(crate) const fn forward(self) -> Option<Handle> {
        self.forward
    }

    #[inline]
    pub(crate) const fn span(self) -> usize {
        self.span.get()
    }

    #[inline]
    pub(crate) fn set_span(&mut self, span: usize) {
        self.span = Span::new(span);
    }

    /// An entry was inserted somewhere underneath this link.
    #[inline]
    pub(crate) fn widen(&mut self) {
        self.span = self.span.wider();
    }

    /// An entry underneath this link was removed.
    #[inline]
    pub(crate) fn narrow(&mut self) {
        self.span = self.span.narrower();
    }
}

/// A stored entry: its key, a handle to its value, and its tower of links.
///
/// The key and the tower height never change after construction.
#[derive(Clone, Debug)]
pub(crate) struct SkipNode<K> {
    key: K,
    value: Handle,
    levels: SmallVec<[Link; INLINE_LEVELS]>,
}

impl<K> SkipNode<K> {
    pub(crate) fn new(key: K, value: Handle, height: usize) -> Self {
        debug_assert!(
            (1..=MAX_LEVEL).contains(&height),
            "`SkipNode::new()` - height {height} outside 1..={MAX_LEVEL}"
        );
        Self {
            key,
            value,
            levels: smallvec![Link::EMPTY; height],
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> Handle {
        self.value
    }

    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub(crate) fn link(&self, level: usize) -> Link {
        self.levels[level]
    }

    #[inline]
    pub(crate) fn link_mut(&mut self, level: usize) -> &mut Link {
        &mut self.levels[level]
    }

    pub(crate) fn into_parts(self) -> (K, Handle) {
        (self.key, self.value)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Link, [Handle; 2]);

    #[test]
    fn new_node_has_empty_tower() {
        let node = SkipNode::new("k", Handle::from_index(3), 5);
        assert_eq!(node.height(), 5);
        assert_eq!(*node.key(), "k");
        assert_eq!(node.value(), Handle::from_index(3));
        for level in 0..5 {
            assert_eq!(node.link(level), Link::EMPTY);
        }
    }

    #[test]
    fn widen_and_narrow_adjust_span() {
        let mut link = Link::new(Some(Handle::from_index(0)), 2);
        link.widen();
        assert_eq!(link.span(), 3);
        link.narrow();
        link.narrow();
        assert_eq!(link.span(), 1);
        assert_eq!(link.forward(), Some(Handle::from_index(0)));
    }

    #[test]
    fn tall_towers_spill_to_heap() {
        let node = SkipNode::new(1u8, Handle::from_index(0), MAX_LEVEL);
        assert_eq!(node.height(), MAX_LEVEL);
        assert!(node.levels.spilled());
    }
}
