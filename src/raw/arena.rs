use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage addressed by [`Handle`].
///
/// Freed slots are recycled before the backing vector grows, so a handle stays
/// valid from `alloc` until the matching `take`.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    /// Whether `alloc` can place one more element.
    pub(crate) fn has_room(&self) -> bool {
        !self.free.is_empty() || self.slots.len() < Handle::MAX
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(h) = self.free.pop() {
            self.slots[h.to_index()] = Some(element);
            h
        } else {
            // Strict less-than keeps every entry count representable as a `Span`.
            assert!(
                self.slots.len() < Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX
            );
            self.slots.push(Some(element));
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
