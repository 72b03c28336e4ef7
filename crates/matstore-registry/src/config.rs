//! Registry configuration parameters.

use matstore_core::{MatrixError, DEFAULT_CAPACITY};

/// Configuration for a [`MatrixRegistry`](crate::MatrixRegistry).
///
/// Fixed at construction. A zero capacity is representable so that the
/// failure surfaces where it matters: [`validate`](Self::validate) reports
/// it, and every insert into such a registry fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Number of slots.
    ///
    /// Default: [`DEFAULT_CAPACITY`] (10).
    pub capacity: usize,
}

impl RegistryConfig {
    /// Create a config with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check that the config can hold at least one matrix.
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.capacity == 0 {
            return Err(MatrixError::invalid("registry capacity is zero"));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_ten() {
        let config = RegistryConfig::default();
        assert_eq!(config.capacity, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_fails_validation() {
        let err = RegistryConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, MatrixError::InvalidArgument { .. }));
    }
}
