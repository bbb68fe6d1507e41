//! Buffer-traffic counters for a single array.
//!
//! [`ArrayStats`] records how often the array replaced its buffer and how
//! many elements it had to carry across, so callers can confirm the
//! amortised growth behaviour without timing anything.

/// Cumulative buffer-management counters.
///
/// Counters start at zero when an array is created (or cloned) and only
/// ever increase until [`reset_stats`](crate::GrowableArray::reset_stats)
/// is called.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrayStats {
    /// Buffer replacements that changed the capacity (growth, or
    /// copy-assignment from an array of different capacity).
    pub reallocations: u64,
    /// Fresh buffers of unchanged capacity built to shift elements on a
    /// mid-sequence insert or remove.
    pub rebuilds: u64,
    /// Elements moved or cloned from one buffer into another.
    pub elements_moved: u64,
}

impl ArrayStats {
    /// Total number of buffers allocated after construction.
    pub fn buffers_built(&self) -> u64 {
        self.reallocations + self.rebuilds
    }
}
