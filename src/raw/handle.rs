use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// A stable index into an [`Arena`](super::arena::Arena) slot.
///
/// Links between skip list nodes are stored as handles rather than references,
/// so the arena stays the sole owner of every node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        // `index + 1` cannot be zero and cannot overflow.
        #[allow(clippy::cast_possible_truncation)]
        let raw = (index + 1) as RawHandle;
        match NonZero::new(raw) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
