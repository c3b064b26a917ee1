//! Configuration for the DWT transformer.

use std::str::FromStr;

use crate::error::DwtError;

/// Configuration for a Haar DWT decomposition.
///
/// `num_levels` is the number of recursive halving levels; level 0 means
/// the transform returns its input unchanged.
///
/// # Example
///
/// ```
/// use kronos_dwt::DwtConfig;
///
/// let config = DwtConfig::new(3);
/// assert_eq!(config.num_levels(), 3);
///
/// let parsed: DwtConfig = "3".parse().unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DwtConfig {
    num_levels: usize,
}

impl DwtConfig {
    /// Creates a configuration with the given number of decomposition levels.
    pub fn new(num_levels: usize) -> Self {
        Self { num_levels }
    }

    /// Creates a configuration from an untyped level count, as arriving
    /// from external callers.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::NegativeLevels`] if `num_levels < 0`.
    pub fn from_levels(num_levels: i64) -> Result<Self, DwtError> {
        if num_levels < 0 {
            return Err(DwtError::NegativeLevels { got: num_levels });
        }
        Ok(Self {
            num_levels: num_levels as usize,
        })
    }

    /// Returns the number of decomposition levels.
    pub fn num_levels(&self) -> usize {
        self.num_levels
    }
}

impl Default for DwtConfig {
    /// Returns the default configuration (`num_levels = 3`).
    fn default() -> Self {
        Self { num_levels: 3 }
    }
}

impl FromStr for DwtConfig {
    type Err = DwtError;

    /// Parses a level count from a string token.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`DwtError::LevelsNotInteger`] | token is not an integer |
    /// | [`DwtError::NegativeLevels`] | token is a negative integer |
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let levels: i64 = s.trim().parse().map_err(|_| DwtError::LevelsNotInteger {
            got: s.to_string(),
        })?;
        Self::from_levels(levels)
    }
}
