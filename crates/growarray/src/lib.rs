//! A growable, contiguous array with explicit capacity management.
//!
//! [`GrowableArray`] owns a single fixed-length buffer and a logical length.
//! Appending doubles the buffer when it is full; inserting or removing
//! anywhere but the end rebuilds the buffer with the elements shifted.
//!
//! # Layout
//!
//! ```text
//! GrowableArray<T>
//! ├── Buffer<T>       (Box<[T]>, length = capacity, default-filled)
//! ├── len             (live prefix [0, len))
//! ├── max_capacity    (optional growth ceiling from ArrayConfig)
//! └── ArrayStats      (reallocation / rebuild counters)
//! ```
//!
//! # Error policy
//!
//! Precondition violations (zero capacity, out-of-range index, removal from
//! an empty array, growth past the limit) are fatal on the primary API and
//! panic with an [`ArrayError`] message. Every fallible operation also has a
//! `try_*` form that returns the [`ArrayError`] and leaves the array
//! untouched.
//!
//! # Logging
//!
//! Buffer replacements are reported at `trace` level and refused growth at
//! `debug` level through the [`log`] facade. The crate installs no logger.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod buffer;
pub mod config;
pub mod error;
pub mod stats;

pub use array::GrowableArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use stats::ArrayStats;
