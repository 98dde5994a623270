//! The blink loop.
//!
//! After [`BlinkLoop::initialize`] the pin sits LOW. Every [`BlinkLoop::step`]
//! holds the current level for one half period and then flips it, so the pin
//! walks `Uninit -> Low -> High -> Low -> ...` with one transition per half
//! period.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{PinState, StatefulOutputPin};

use crate::config::{BlinkConfig, Pattern};
use crate::error::Error;

/// Where the loop is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// The pin has not been driven yet.
    Uninit,
    Low,
    High,
}

impl Phase {
    /// Current pin level, `None` before initialization.
    pub const fn level(self) -> Option<PinState> {
        match self {
            Phase::Uninit => None,
            Phase::Low => Some(PinState::Low),
            Phase::High => Some(PinState::High),
        }
    }

    const fn from_high(high: bool) -> Self {
        if high {
            Phase::High
        } else {
            Phase::Low
        }
    }
}

/// Owns one output pin and one blocking delay and blinks the pin forever.
///
/// The pin must already be configured as an output; on HAL crates that is
/// the type of `P` (e.g. `embassy_nrf::gpio::Output`).
pub struct BlinkLoop<P, D> {
    pin: P,
    delay: D,
    config: BlinkConfig,
    phase: Phase,
    transitions: u32,
}

impl<P, D> BlinkLoop<P, D>
where
    P: StatefulOutputPin,
    D: DelayNs,
{
    /// Wraps `pin` and `delay`. The hardware is not touched until
    /// [`initialize`](Self::initialize) or the first [`step`](Self::step).
    pub fn new(pin: P, delay: D, config: BlinkConfig) -> Self {
        Self {
            pin,
            delay,
            config,
            phase: Phase::Uninit,
            transitions: 0,
        }
    }

    /// Drives the pin LOW. Only the first successful call has an effect.
    ///
    /// # Errors
    ///
    /// [`Error::Pin`] if the driver fails, [`Error::LevelUnchanged`] if the
    /// output register does not read back LOW. The loop stays uninitialized
    /// in both cases.
    pub fn initialize(&mut self) -> Result<(), Error<P::Error>> {
        if self.phase != Phase::Uninit {
            return Ok(());
        }

        self.pin.set_low().map_err(Error::Pin)?;
        if !self.pin.is_set_low().map_err(Error::Pin)? {
            log_warn!("output level stuck high on initialization");
            return Err(Error::LevelUnchanged);
        }
        self.phase = Phase::Low;

        let half_period = self.config.half_period();
        log_info!(
            "blink loop initialized: half period {} ms, period {} ms, pattern {}",
            half_period.as_millis(),
            half_period.period_millis(),
            self.config.pattern().name()
        );
        Ok(())
    }

    /// Holds the current level for one half period, then flips it.
    ///
    /// Returns the new level.
    ///
    /// # Errors
    ///
    /// [`Error::Pin`] if the driver fails, [`Error::LevelUnchanged`] if the
    /// output register still shows the old level after the transition.
    pub fn step(&mut self) -> Result<PinState, Error<P::Error>> {
        self.initialize()?;

        self.delay.delay_ms(self.config.half_period().as_millis());

        let previous = self.phase;
        match self.config.pattern() {
            Pattern::Toggle => self.pin.toggle().map_err(Error::Pin)?,
            Pattern::TwoPhase => match previous {
                Phase::High => self.pin.set_low().map_err(Error::Pin)?,
                Phase::Low | Phase::Uninit => self.pin.set_high().map_err(Error::Pin)?,
            },
        }

        let next = Phase::from_high(self.pin.is_set_high().map_err(Error::Pin)?);
        if next == previous {
            log_warn!("output level stuck after {} transitions", self.transitions);
            return Err(Error::LevelUnchanged);
        }

        self.phase = next;
        self.transitions = self.transitions.wrapping_add(1);
        log_trace!("transition {}: high={}", self.transitions, next == Phase::High);

        Ok(match next {
            Phase::High => PinState::High,
            Phase::Low | Phase::Uninit => PinState::Low,
        })
    }

    /// One full on/off period: two steps.
    pub fn cycle(&mut self) -> Result<(), Error<P::Error>> {
        self.step()?;
        self.step()?;
        Ok(())
    }

    /// Blinks until a step fails. `Ok` is uninhabited, and with an infallible
    /// pin so is `Error::Pin`.
    pub fn run_forever(mut self) -> Result<Infallible, Error<P::Error>> {
        loop {
            self.step()?;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> Option<PinState> {
        self.phase.level()
    }

    /// Transitions since initialization, wrapping at `u32::MAX`.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// Gives back the pin and the delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}
