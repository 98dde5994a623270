//! Error types for the blink loop.

use core::fmt;

/// Errors that stop the blink loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The pin driver reported an error.
    Pin(E),
    /// The output level read back after a transition equals the previous one.
    LevelUnchanged,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pin error: {e:?}"),
            Error::LevelUnchanged => f.write_str("output level did not change on transition"),
        }
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A half period of zero would spin without a visible blink.
    ZeroHalfPeriod,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroHalfPeriod => f.write_str("half period must be non-zero"),
        }
    }
}
