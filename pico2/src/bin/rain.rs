//! Matrix rain on the ST7796S panel, Raspberry Pi Pico 2 (RP2350).
//!
//! # Architecture
//!
//! Single task, no framebuffer. The main loop polls a [`TickGate`] against the
//! monotonic clock and, every `TICK_MS`, advances the rain and draws only the
//! cells that changed straight to the panel. Between ticks it sleeps.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::Spi;
use embassy_time::{Instant, Timer};
use embedded_graphics::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tft_rain_common::colors::BLACK;
use tft_rain_common::config::{RAIN_STARTUP_DELAY_MS, SPLASH_MS, TICK_MS};
use tft_rain_common::screens::draw_splash;
use tft_rain_common::{MatrixRain, PIN_CONFIG, TickGate};
use tft_rain_pico2::{display_spi_config, init_display, log_pin_config};
use {defmt_rtt as _, panic_probe as _};

/// Log a heartbeat every this many ticks (~30 s at 30 ms).
const HEARTBEAT_TICKS: u32 = 1000;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"tft-rain"),
    embassy_rp::binary_info::rp_program_description!(c"Matrix rain on an ST7796S display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    Timer::after_millis(u64::from(RAIN_STARTUP_DELAY_MS)).await;
    log_pin_config(&PIN_CONFIG);

    // Ring oscillator jitter is the only entropy source needed here
    let rng = SmallRng::from_rng(&mut RoscRng);

    // Must match PIN_CONFIG: CS=13, DC=9, RST=8, SCLK=10, MOSI=11
    let cs = Output::new(p.PIN_13, Level::High);
    let dc = Output::new(p.PIN_9, Level::Low);
    let rst = Output::new(p.PIN_8, Level::High);
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, display_spi_config());

    info!("About to initialize display...");
    let mut display = init_display(spi, cs, dc, rst);
    display.clear(BLACK).ok();
    info!("Display initialized");

    let mut rain = MatrixRain::for_screen(display.bounding_box().size, rng);
    info!("Rain grid: {}", rain.grid());

    draw_splash(&mut display).ok();
    Timer::after_millis(u64::from(SPLASH_MS)).await;
    display.clear(BLACK).ok();

    let mut gate = TickGate::new(TICK_MS);
    let mut ticks = 0u32;

    info!("Starting rain loop...");

    loop {
        let now = Instant::now().as_millis() as u32;
        if !gate.ready(now) {
            Timer::after_millis(u64::from(gate.remaining(now))).await;
            continue;
        }

        let tick_start = Instant::now();
        rain.tick(&mut display).ok();
        ticks = ticks.wrapping_add(1);

        if ticks.is_multiple_of(HEARTBEAT_TICKS) {
            info!("{} ticks, last took {} us", ticks, tick_start.elapsed().as_micros());
        }
    }
}
