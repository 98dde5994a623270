//! Compile-time blink configuration.

use core::fmt;

use crate::error::ConfigError;

/// Hold time between two transitions when nothing else is configured.
const DEFAULT_HALF_PERIOD_MS: u32 = 1000;

/// Time the pin holds one level, in milliseconds. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HalfPeriod(u32);

impl HalfPeriod {
    pub const DEFAULT: Self = Self(DEFAULT_HALF_PERIOD_MS);

    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroHalfPeriod`] for `0`.
    pub const fn from_millis(ms: u32) -> Result<Self, ConfigError> {
        if ms == 0 {
            Err(ConfigError::ZeroHalfPeriod)
        } else {
            Ok(Self(ms))
        }
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Full on/off period, saturating at `u32::MAX`.
    pub const fn period_millis(self) -> u32 {
        self.0.saturating_mul(2)
    }
}

impl Default for HalfPeriod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for HalfPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

/// How a transition is driven onto the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// Invert the output register.
    #[default]
    Toggle,
    /// Explicitly assert the level opposite to the tracked one.
    TwoPhase,
}

impl Pattern {
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Toggle => "toggle",
            Pattern::TwoPhase => "two-phase",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    half_period: HalfPeriod,
    pattern: Pattern,
}

impl BlinkConfig {
    pub const fn new() -> Self {
        Self {
            half_period: HalfPeriod::DEFAULT,
            pattern: Pattern::Toggle,
        }
    }

    pub const fn with_half_period(mut self, half_period: HalfPeriod) -> Self {
        self.half_period = half_period;
        self
    }

    pub const fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub const fn half_period(&self) -> HalfPeriod {
        self.half_period
    }

    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::new()
    }
}
