//! nRF52840-DK wiring.

use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::peripherals::P0_13;
use embassy_time::Delay;

use crate::blink::BlinkLoop;
use crate::config::BlinkConfig;

/// LED1 on the nRF52840-DK.
pub type Led = Output<'static, P0_13>;

pub struct Board {
    pub led: Led,
    pub delay: Delay,
}

impl Board {
    /// Brings up the chip and configures the LED pin as a push-pull output,
    /// starting LOW. The pin direction is fixed from here on.
    pub fn init() -> Self {
        let peripherals = embassy_nrf::init(Default::default());
        let led = Output::new(peripherals.P0_13, Level::Low, OutputDrive::Standard);

        Self { led, delay: Delay }
    }

    pub fn blink_loop(self, config: BlinkConfig) -> BlinkLoop<Led, Delay> {
        BlinkLoop::new(self.led, self.delay, config)
    }
}
