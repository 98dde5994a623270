#![no_std]
#![no_main]

use blinky_embassy::{board::Board, BlinkConfig, Error, HalfPeriod, Pattern};
use defmt_rtt as _;
use panic_probe as _;

#[embassy_executor::main]
async fn main(_spawner: embassy_executor::Spawner) {
    let config = BlinkConfig::new()
        .with_half_period(HalfPeriod::DEFAULT)
        .with_pattern(Pattern::TwoPhase);
    defmt::info!("two-phase blinky starting");

    let mut blink = Board::init().blink_loop(config);
    loop {
        match blink.cycle() {
            Ok(()) => {}
            Err(Error::Pin(never)) => match never {},
            Err(Error::LevelUnchanged) => defmt::panic!("LED output stuck"),
        }
    }
}
