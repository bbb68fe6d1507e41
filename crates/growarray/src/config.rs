//! Array configuration parameters.

use crate::error::ArrayError;

/// Configuration for a [`GrowableArray`](crate::GrowableArray).
///
/// Controls the initial allocation and an optional hard ceiling on growth.
/// Validated at construction; the array copies what it needs and does not
/// keep the config around.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 1. Must be greater than zero.
    pub initial_capacity: usize,

    /// Largest capacity the array may grow to.
    ///
    /// Default: `None` (bounded only by `usize`). Growth that would double
    /// past this value is rejected with [`ArrayError::CapacityExceeded`]
    /// rather than clamped, so the doubling sequence stays exact.
    pub max_capacity: Option<usize>,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Multiplier applied to the capacity whenever the buffer is full.
    pub const GROWTH_FACTOR: usize = 2;

    /// Create a config with the given initial capacity and no growth limit.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity: None,
        }
    }

    /// Set the growth ceiling.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Check the config for contract violations.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ZeroCapacity`] if `initial_capacity` is zero,
    /// or [`ArrayError::CapacityExceeded`] if it is larger than
    /// `max_capacity`.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.initial_capacity == 0 {
            return Err(ArrayError::ZeroCapacity);
        }
        if let Some(max) = self.max_capacity {
            if self.initial_capacity > max {
                return Err(ArrayError::CapacityExceeded {
                    current: self.initial_capacity,
                    max,
                });
            }
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_one() {
        let config = ArrayConfig::default();
        assert_eq!(config.initial_capacity, 1);
        assert_eq!(config.max_capacity, None);
        config.validate().unwrap();
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            ArrayConfig::new(0).validate(),
            Err(ArrayError::ZeroCapacity)
        );
    }

    #[test]
    fn initial_above_max_rejected() {
        let config = ArrayConfig::new(16).with_max_capacity(8);
        assert!(matches!(
            config.validate(),
            Err(ArrayError::CapacityExceeded { current: 16, max: 8 })
        ));
    }

    #[test]
    fn initial_equal_to_max_is_valid() {
        ArrayConfig::new(8).with_max_capacity(8).validate().unwrap();
    }
}
