//! Dispatcher configuration.

use std::path::PathBuf;

use matstore_core::MatrixError;
use matstore_registry::RegistryConfig;

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Slot table settings for the owned registry.
    pub registry: RegistryConfig,
    /// Directory that `write <name>` saves into, as `output_dir/<name>`.
    /// Names that are not a single plain file name are refused.
    ///
    /// Default: the current directory.
    pub output_dir: PathBuf,
    /// Seed for `random`. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl DispatchConfig {
    /// Check every nested setting.
    pub fn validate(&self) -> Result<(), MatrixError> {
        self.registry.validate()?;
        if self.output_dir.as_os_str().is_empty() {
            return Err(MatrixError::invalid("output directory is empty"));
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            output_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(DispatchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let config = DispatchConfig {
            registry: RegistryConfig::new(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_output_dir_is_invalid() {
        let config = DispatchConfig {
            output_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
