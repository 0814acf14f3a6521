//! Shared firmware pieces for the `hello` and `rain` programs.
//!
//! Everything animation related lives in `tft-rain-common` and is tested on
//! the host. This crate only adds what needs the RP2350: display bring-up
//! and defmt reporting.

#![no_std]

mod display;

use defmt::info;
use tft_rain_common::PinConfig;
use tft_rain_common::pins::PIN_REPORT_HEADER;

pub use display::{TftDisplay, display_spi_config, init_display};

/// Log the pin mapping over RTT, one line per wired signal.
pub fn log_pin_config(config: &PinConfig) {
    info!("{=str}", PIN_REPORT_HEADER);
    for (label, gpio) in config.entries() {
        info!("  {=str}: {=u8}", label, gpio);
    }
}
