//! Exclusively owned, fixed-length slot storage.
//!
//! A [`Buffer`] is a boxed slice whose length is the array capacity. Every
//! slot always holds a value: slots outside the logical length hold
//! `T::default()`. The buffer never changes length. Growing or shifting
//! means building a new buffer and moving elements across.

use std::ops::Range;

pub(crate) struct Buffer<T> {
    slots: Box<[T]>,
}

impl<T: Default> Buffer<T> {
    /// Allocate `capacity` default-filled slots.
    pub(crate) fn allocate(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(T::default).take(capacity).collect(),
        }
    }

    /// Move the value out of `index`, leaving a default in its place.
    pub(crate) fn take(&mut self, index: usize) -> T {
        std::mem::take(&mut self.slots[index])
    }

    /// Reset every slot in `range` to its default value.
    pub(crate) fn vacate(&mut self, range: Range<usize>) {
        self.slots[range].fill_with(T::default);
    }

    /// Move `source[range]` into this buffer starting at `dest`.
    ///
    /// The source slots are left holding defaults.
    ///
    /// # Panics
    ///
    /// Panics if either range is outside its buffer.
    pub(crate) fn move_from(&mut self, source: &mut Buffer<T>, range: Range<usize>, dest: usize) {
        let end = dest + range.len();
        for (dst, src) in self.slots[dest..end]
            .iter_mut()
            .zip(source.slots[range].iter_mut())
        {
            *dst = std::mem::take(src);
        }
    }
}

impl<T: Clone> Buffer<T> {
    /// Overwrite the leading slots with clones of `values`.
    pub(crate) fn clone_prefix_from(&mut self, values: &[T]) {
        self.slots[..values.len()].clone_from_slice(values);
    }
}

impl<T> Buffer<T> {
    /// Number of slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Overwrite the slot at `index`.
    pub(crate) fn put(&mut self, index: usize, value: T) {
        self.slots[index] = value;
    }

    /// The first `len` slots.
    pub(crate) fn live(&self, len: usize) -> &[T] {
        &self.slots[..len]
    }

    /// The first `len` slots, mutably.
    pub(crate) fn live_mut(&mut self, len: usize) -> &mut [T] {
        &mut self.slots[..len]
    }

    /// Consume the buffer, keeping only the first `len` slots.
    pub(crate) fn into_live_vec(self, len: usize) -> Vec<T> {
        let mut values = self.slots.into_vec();
        values.truncate(len);
        values
    }
}
