//! Blocking LED blink loop.
//!
//! The loop is generic over the embedded-hal digital output and delay traits,
//! so it runs against real hardware (see [`board`] with the `nrf52840`
//! feature) and against recording mocks on the host.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod logging;

pub mod blink;
#[cfg(feature = "nrf52840")]
pub mod board;
pub mod config;
pub mod error;

pub use blink::{BlinkLoop, Phase};
pub use config::{BlinkConfig, HalfPeriod, Pattern};
pub use error::{ConfigError, Error};
