#![no_std]
#![no_main]

use blinky_embassy::{board::Board, BlinkConfig, Error, Pattern};
use defmt_rtt as _;
use panic_probe as _;

#[embassy_executor::main]
async fn main(_spawner: embassy_executor::Spawner) {
    let config = BlinkConfig::new().with_pattern(Pattern::Toggle);
    defmt::info!("blinky starting");

    // Blocks the executor thread for good; nothing else is spawned.
    match Board::init().blink_loop(config).run_forever() {
        Ok(never) => match never {},
        Err(Error::Pin(never)) => match never {},
        Err(Error::LevelUnchanged) => defmt::panic!("LED output stuck"),
    }
}
