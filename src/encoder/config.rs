use crate::{error::ConfigError, Result};

pub const DEFAULT_READ_LEN: usize = 100;
pub const DEFAULT_STEP: usize = 20;

/// Largest accepted read length, keeping window offset arithmetic within `usize`
pub const MAX_READ_LEN: usize = usize::MAX / 2;

/// Sizing information for sliding-window read fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadWindowConfig {
    /// Width of every emitted fragment
    read_len: usize,

    /// Distance between the starts of consecutive windows
    step: usize,
}
impl ReadWindowConfig {
    pub fn new(read_len: usize, step: usize) -> Result<Self> {
        if read_len == 0 {
            return Err(ConfigError::ZeroReadLength.into());
        }
        if read_len > MAX_READ_LEN {
            return Err(ConfigError::ReadLengthTooLarge(read_len).into());
        }
        if step == 0 {
            return Err(ConfigError::ZeroStep.into());
        }
        Ok(Self { read_len, step })
    }

    #[must_use]
    pub fn read_len(&self) -> usize {
        self.read_len
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether a boundary window missing `missing_len` bases is still mostly real data
    ///
    /// Strictly less than half of `read_len`, compared without rounding.
    #[inline]
    #[must_use]
    pub fn keeps_partial(&self, missing_len: usize) -> bool {
        2 * missing_len < self.read_len
    }
}
impl Default for ReadWindowConfig {
    fn default() -> Self {
        Self {
            read_len: DEFAULT_READ_LEN,
            step: DEFAULT_STEP,
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::Error;

    #[test]
    fn test_rejects_zero_values() {
        assert!(matches!(
            ReadWindowConfig::new(0, 1),
            Err(Error::ConfigError(ConfigError::ZeroReadLength))
        ));
        assert!(matches!(
            ReadWindowConfig::new(10, 0),
            Err(Error::ConfigError(ConfigError::ZeroStep))
        ));
    }

    #[test]
    fn test_rejects_oversized_read_len() {
        assert!(matches!(
            ReadWindowConfig::new(usize::MAX, 1),
            Err(Error::ConfigError(ConfigError::ReadLengthTooLarge(usize::MAX)))
        ));
        let config = ReadWindowConfig::new(MAX_READ_LEN, 1).unwrap();
        assert!(!config.keeps_partial(MAX_READ_LEN));
    }

    #[test]
    fn test_half_threshold_is_strict() {
        let even = ReadWindowConfig::new(4, 1).unwrap();
        assert!(even.keeps_partial(1));
        assert!(!even.keeps_partial(2));

        // 5 / 2 = 2.5, so two missing bases are kept and three are not
        let odd = ReadWindowConfig::new(5, 1).unwrap();
        assert!(odd.keeps_partial(2));
        assert!(!odd.keeps_partial(3));
    }

    #[test]
    fn test_default() {
        let config = ReadWindowConfig::default();
        assert_eq!(config.read_len(), 100);
        assert_eq!(config.step(), 20);
    }
}
