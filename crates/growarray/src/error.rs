//! Precondition violations for growable-array operations.

use std::error::Error;
use std::fmt;

/// A caller supplied input that violates a documented array contract.
///
/// The panicking API ([`push`], [`pop`], [`insert`], [`remove`], indexing,
/// constructors) treats every variant as fatal and panics with its
/// `Display` text. The `try_*` API returns it instead, leaving the array
/// exactly as it was before the call.
///
/// [`push`]: crate::GrowableArray::push
/// [`pop`]: crate::GrowableArray::pop
/// [`insert`]: crate::GrowableArray::insert
/// [`remove`]: crate::GrowableArray::remove
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An initial capacity of zero was requested.
    ZeroCapacity,
    /// Indexed access or removal at a position outside `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// Insertion at a position outside `[0, len]`.
    InsertOutOfBounds {
        /// The offending index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// Removal from an array with no elements.
    Empty,
    /// Doubling the buffer would pass the configured capacity limit
    /// (or overflow `usize`).
    CapacityExceeded {
        /// Capacity before the attempted growth.
        current: usize,
        /// The limit that would have been exceeded.
        max: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "array capacity must be greater than zero"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::InsertOutOfBounds { index, len } => {
                write!(f, "insert index {index} out of bounds for length {len}")
            }
            Self::Empty => write!(f, "cannot remove from an empty array"),
            Self::CapacityExceeded { current, max } => {
                write!(
                    f,
                    "array capacity exceeded: cannot grow beyond {current} (limit {max})"
                )
            }
        }
    }
}

impl Error for ArrayError {}
