//! The growable array itself.
//!
//! [`GrowableArray`] owns one `Buffer` whose length is the capacity and
//! tracks a logical length separately. Appends double the capacity when
//! full. Mid-sequence inserts and removes always rebuild into a fresh
//! buffer, so they are O(n) whether or not growth occurs.

use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::buffer::Buffer;
use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::stats::ArrayStats;

/// An owning, contiguous, growable sequence with explicit capacity.
///
/// # Contract
///
/// The methods without a `try_` prefix treat a precondition violation as
/// fatal and panic with the corresponding [`ArrayError`] message. Each has
/// a `try_` twin that returns the error instead. A call that fails never
/// changes the length, capacity, or contents.
///
/// Vacated slots (after [`pop`](Self::pop), [`remove`](Self::remove) or
/// [`clear`](Self::clear)) are reset to `T::default()`, so any resource a
/// removed element held is released at once.
///
/// # Example
///
/// ```
/// use growarray::GrowableArray;
///
/// let mut arr = GrowableArray::new();
/// for v in 1..=5 {
///     arr.push(v);
/// }
/// assert_eq!(arr.capacity(), 8);
///
/// arr.insert(2, 6);
/// assert_eq!(arr.as_slice(), &[1, 2, 6, 3, 4, 5]);
/// assert_eq!(arr.remove(0), 1);
/// ```
pub struct GrowableArray<T> {
    buffer: Buffer<T>,
    len: usize,
    max_capacity: Option<usize>,
    stats: ArrayStats,
}

#[cold]
#[track_caller]
fn violated(err: ArrayError) -> ! {
    panic!("{err}")
}

impl<T: Default> GrowableArray<T> {
    /// Create an empty array with capacity 1.
    pub fn new() -> Self {
        Self::with_capacity(ArrayConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty array with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(ArrayConfig::new(capacity))
    }

    /// Create an empty array from a full config.
    ///
    /// # Panics
    ///
    /// Panics if the config fails [`ArrayConfig::validate`].
    #[track_caller]
    pub fn with_config(config: ArrayConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(arr) => arr,
            Err(err) => violated(err),
        }
    }

    /// Create an empty array from a config, returning an error if it is
    /// invalid.
    pub fn try_with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        Ok(Self {
            buffer: Buffer::allocate(config.initial_capacity),
            len: 0,
            max_capacity: config.max_capacity,
            stats: ArrayStats::default(),
        })
    }

    /// Append `value`, doubling the capacity first if the array is full.
    ///
    /// O(1) amortised; O(n) on the call that reallocates.
    ///
    /// # Panics
    ///
    /// Panics if growth would exceed the configured maximum capacity.
    #[track_caller]
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            violated(err);
        }
    }

    /// Append `value`, returning an error instead of growing past the
    /// capacity limit.
    pub fn try_push(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len == self.capacity() {
            let grown = self.grown_capacity()?;
            let mut fresh = Buffer::allocate(grown);
            fresh.move_from(&mut self.buffer, 0..self.len, 0);
            self.adopt(fresh, self.len);
        }
        self.buffer.put(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element. Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        match self.try_pop() {
            Ok(value) => value,
            Err(err) => violated(err),
        }
    }

    /// Remove and return the last element, or [`ArrayError::Empty`].
    pub fn try_pop(&mut self) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::Empty);
        }
        self.len -= 1;
        Ok(self.buffer.take(self.len))
    }

    /// Insert `value` at `index`, shifting `[index, len)` one place right.
    ///
    /// Inserting at `len` is exactly [`push`](Self::push). Any other
    /// position rebuilds the buffer, doubling it if the array is full.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or if growth would exceed the configured
    /// maximum capacity.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert(index, value) {
            violated(err);
        }
    }

    /// Fallible form of [`insert`](Self::insert).
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::InsertOutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            return self.try_push(value);
        }

        let target = if self.len == self.capacity() {
            self.grown_capacity()?
        } else {
            self.capacity()
        };

        let mut fresh = Buffer::allocate(target);
        fresh.move_from(&mut self.buffer, 0..index, 0);
        fresh.put(index, value);
        fresh.move_from(&mut self.buffer, index..self.len, index + 1);
        self.adopt(fresh, self.len);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting `(index, len)`
    /// one place left.
    ///
    /// Removing the last element is exactly [`pop`](Self::pop). Any other
    /// position rebuilds the buffer at the current capacity.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        match self.try_remove(index) {
            Ok(value) => value,
            Err(err) => violated(err),
        }
    }

    /// Fallible form of [`remove`](Self::remove).
    pub fn try_remove(&mut self, index: usize) -> Result<T, ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::Empty);
        }
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == self.len - 1 {
            return self.try_pop();
        }

        let mut fresh = Buffer::allocate(self.capacity());
        fresh.move_from(&mut self.buffer, 0..index, 0);
        let removed = self.buffer.take(index);
        fresh.move_from(&mut self.buffer, index + 1..self.len, index);
        self.adopt(fresh, self.len - 1);
        self.len -= 1;
        Ok(removed)
    }

    /// Drop every element. Capacity and the allocation are kept.
    pub fn clear(&mut self) {
        self.buffer.vacate(0..self.len);
        self.len = 0;
    }

    fn grown_capacity(&self) -> Result<usize, ArrayError> {
        let current = self.capacity();
        let max = self.max_capacity.unwrap_or(usize::MAX);
        match current.checked_mul(ArrayConfig::GROWTH_FACTOR) {
            Some(grown) if grown <= max => Ok(grown),
            _ => {
                log::debug!("refusing to grow array past capacity {current} (limit {max})");
                Err(ArrayError::CapacityExceeded { current, max })
            }
        }
    }

    /// Replace the buffer with `fresh`, releasing the old one.
    fn adopt(&mut self, fresh: Buffer<T>, moved: usize) {
        let old_capacity = self.capacity();
        let new_capacity = fresh.capacity();
        self.buffer = fresh;

        if new_capacity == old_capacity {
            self.stats.rebuilds += 1;
        } else {
            self.stats.reallocations += 1;
        }
        self.stats.elements_moved += moved as u64;
        log::trace!("array buffer replaced: capacity {old_capacity} -> {new_capacity}, {moved} moved");
    }
}

impl<T: Clone + Default> GrowableArray<T> {
    /// Copy-assign from `source`.
    ///
    /// If the capacities differ, the current buffer is released and one of
    /// exactly `source.capacity()` slots is allocated; otherwise the buffer
    /// is reused. The first `source.len()` elements are cloned across in
    /// order and the target's previous contents are discarded. The capacity
    /// limit is copied too; the stats are not.
    ///
    /// Assigning an array to itself would be a no-op, and the borrow rules
    /// already make `a.assign_from(&a)` impossible to write.
    pub fn assign_from(&mut self, source: &Self) -> &mut Self {
        if self.capacity() != source.capacity() {
            let old_capacity = self.capacity();
            self.buffer = Buffer::allocate(source.capacity());
            self.stats.reallocations += 1;
            log::trace!(
                "array buffer replaced on assign: capacity {old_capacity} -> {}",
                source.capacity()
            );
        } else if self.len > source.len {
            self.buffer.vacate(source.len..self.len);
        }

        self.buffer.clone_prefix_from(source.as_slice());
        self.len = source.len;
        self.max_capacity = source.max_capacity;
        self.stats.elements_moved += source.len as u64;
        self
    }
}

impl<T> GrowableArray<T> {
    /// Number of logically present elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots. Always at least 1.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The configured growth ceiling, if any.
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Reference to the element at `index`, or `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable reference to the element at `index`, or `None` if
    /// `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The live elements `[0, len)`.
    pub fn as_slice(&self) -> &[T] {
        self.buffer.live(self.len)
    }

    /// The live elements `[0, len)`, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.live_mut(self.len)
    }

    /// Iterate over the live elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Buffer-traffic counters since creation or the last reset.
    pub fn stats(&self) -> ArrayStats {
        self.stats
    }

    /// Zero the buffer-traffic counters.
    pub fn reset_stats(&mut self) {
        self.stats = ArrayStats::default();
    }
}

impl<T: Default> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self {
            buffer: Buffer::allocate(self.capacity()),
            len: 0,
            max_capacity: self.max_capacity,
            stats: ArrayStats::default(),
        };
        copy.assign_from(self);
        copy.reset_stats();
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let len = self.len;
        match self.get(index) {
            Some(value) => value,
            None => violated(ArrayError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => violated(ArrayError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Default> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Default> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_live_vec(self.len).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
