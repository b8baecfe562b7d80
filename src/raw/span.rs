use super::handle::Handle;

/// The number of level-0 entries a forward link steps over.
///
/// A span never exceeds the entry count, and the arena caps that at
/// `Handle::MAX`, so spans share the handle's niche-optimised representation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Span(Handle);

impl Span {
    /// The span of a link on a level that holds no entries yet.
    pub(crate) const ZERO: Self = Self::new(0);

    #[inline]
    pub(crate) const fn new(entries: usize) -> Self {
        assert!(entries <= Handle::MAX, "`Span::new()` - span is longer than any list can be!");
        Self(Handle::from_index(entries))
    }

    #[inline]
    pub(crate) const fn get(self) -> usize {
        self.0.to_index()
    }

    /// The span after one entry is inserted underneath the link.
    #[inline]
    pub(crate) const fn wider(self) -> Self {
        Self::new(self.get() + 1)
    }

    /// The span after one entry underneath the link is removed.
    #[inline]
    pub(crate) const fn narrower(self) -> Self {
        assert!(self.get() > 0, "`Span::narrower()` - span is already zero!");
        Self::new(self.get() - 1)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Span, Option<Span>);
    assert_eq_size!(Span, Handle);

    #[test]
    #[should_panic(expected = "`Span::new()` - span is longer than any list can be!")]
    fn span_past_max_panics() {
        let _ = Span::new(Handle::MAX + 1);
    }

    #[test]
    #[should_panic(expected = "`Span::narrower()` - span is already zero!")]
    fn narrowing_zero_panics() {
        let _ = Span::ZERO.narrower();
    }

    #[test]
    fn zero_is_empty() {
        assert_eq!(Span::ZERO.get(), 0);
        assert_eq!(Span::ZERO.wider(), Span::new(1));
    }

    proptest! {
        #[test]
        fn wider_then_narrower_is_identity(entries in 0..Handle::MAX) {
            let span = Span::new(entries);
            prop_assert_eq!(span.get(), entries);
            prop_assert_eq!(span.wider().get(), entries + 1);
            prop_assert_eq!(span.wider().narrower(), span);
        }
    }
}
