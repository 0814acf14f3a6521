//! Pin check for the ST7796S panel on a Raspberry Pi Pico 2 (RP2350).
//!
//! Reports the configured pins over RTT, brings up the display and prints a
//! greeting. If the greeting shows, the wiring is right.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::Spi;
use embassy_time::Timer;
use tft_rain_common::PIN_CONFIG;
use tft_rain_common::config::HELLO_STARTUP_DELAY_MS;
use tft_rain_common::screens::draw_hello;
use tft_rain_pico2::{display_spi_config, init_display, log_pin_config};
use {defmt_rtt as _, panic_probe as _};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"tft-hello"),
    embassy_rp::binary_info::rp_program_description!(c"ST7796S pin check"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // Give the probe a moment to attach before the report
    Timer::after_millis(u64::from(HELLO_STARTUP_DELAY_MS)).await;
    log_pin_config(&PIN_CONFIG);

    // Must match PIN_CONFIG: CS=13, DC=9, RST=8, SCLK=10, MOSI=11
    let cs = Output::new(p.PIN_13, Level::High);
    let dc = Output::new(p.PIN_9, Level::Low);
    let rst = Output::new(p.PIN_8, Level::High);
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, display_spi_config());

    info!("About to initialize display...");
    let mut display = init_display(spi, cs, dc, rst);
    info!("Display initialized");

    draw_hello(&mut display).ok();

    // Nothing else to do; leave the message up
    core::future::pending::<()>().await;
}
