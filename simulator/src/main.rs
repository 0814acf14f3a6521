//! Desktop simulator for the ST7796S pin check and matrix rain.
//!
//! Runs either program in an `embedded-graphics-simulator` window at the
//! panel's landscape resolution, using the same drawing code as the firmware.
//! The pin report goes to stdout instead of RTT.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod timing;

use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tft_rain_common::colors::BLACK;
use tft_rain_common::config::{
    GLYPH_SET, HELLO_STARTUP_DELAY_MS, RAIN_STARTUP_DELAY_MS, SCREEN_HEIGHT, SCREEN_WIDTH, SPLASH_MS, TICK_MS,
};
use tft_rain_common::glyph::GlyphSet;
use tft_rain_common::pins::PIN_REPORT_HEADER;
use tft_rain_common::screens::{draw_hello, draw_splash};
use tft_rain_common::styles::RAIN_FONT;
use tft_rain_common::{Grid, MatrixRain, PIN_CONFIG, PinConfig, TickGate};

use crate::timing::{IDLE_FRAME, millis_since};

/// Which program to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Sketch {
    /// Pin report and greeting
    Hello,
    /// Matrix rain animation
    Rain,
}

impl Sketch {
    /// Pause before the pin report, matching the firmware binary.
    const fn startup_delay(self) -> Duration {
        let ms = match self {
            Self::Hello => HELLO_STARTUP_DELAY_MS,
            Self::Rain => RAIN_STARTUP_DELAY_MS,
        };
        Duration::from_millis(ms as u64)
    }
}

#[derive(Debug, Parser)]
#[command(name = "simulator", version, about = "Desktop preview of the ST7796S pin check and matrix rain")]
struct Args {
    /// Program to run
    #[arg(long, value_enum, default_value_t = Sketch::Rain)]
    sketch: Sketch,

    /// Window pixel scale
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    scale: u32,

    /// Fixed RNG seed for a repeatable rain
    #[arg(long)]
    seed: Option<u64>,

    /// Draw ASCII glyphs only
    #[arg(long)]
    ascii: bool,
}

fn main() {
    let args = Args::parse();

    thread::sleep(args.sketch.startup_delay());
    print_pin_config(&PIN_CONFIG);

    println!("About to initialize display...");
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("ST7796S 480x320", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);
    println!("Display initialized");

    match args.sketch {
        Sketch::Hello => run_hello(&mut display, &mut window),
        Sketch::Rain => run_rain(&mut display, &mut window, &args),
    }
}

/// Print the pin mapping the way the firmware logs it.
fn print_pin_config(config: &PinConfig) {
    println!("{PIN_REPORT_HEADER}");
    for (label, gpio) in config.entries() {
        println!("  {label}: {gpio}");
    }
}

/// Drain window events. Returns false once the window is closed.
fn pump_events(window: &mut Window) -> bool { !window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) }

/// Keep `display` on screen for `duration`, or until the window closes.
fn hold(
    display: &SimulatorDisplay<Rgb565>,
    window: &mut Window,
    duration: Duration,
) -> bool {
    let start = Instant::now();
    while start.elapsed() < duration {
        window.update(display);
        if !pump_events(window) {
            return false;
        }
        thread::sleep(IDLE_FRAME);
    }
    true
}

fn run_hello(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
) {
    draw_hello(display).ok();

    loop {
        window.update(display);
        if !pump_events(window) {
            return;
        }
        thread::sleep(IDLE_FRAME);
    }
}

fn run_rain(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    args: &Args,
) {
    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let glyphs = if args.ascii { GlyphSet::Ascii } else { GLYPH_SET };
    let grid = Grid::for_font(display.size(), RAIN_FONT);
    let mut rain = MatrixRain::new(grid, rng, glyphs);
    println!("Rain grid: {} cols x {} rows", grid.cols, grid.rows);

    draw_splash(display).ok();
    if !hold(display, window, Duration::from_millis(u64::from(SPLASH_MS))) {
        return;
    }
    display.clear(BLACK).ok();

    let start = Instant::now();
    let mut gate = TickGate::new(TICK_MS);

    loop {
        if !pump_events(window) {
            return;
        }

        let now = millis_since(start);
        if !gate.ready(now) {
            thread::sleep(Duration::from_millis(u64::from(gate.remaining(now))));
            continue;
        }

        rain.tick(display).ok();
        window.update(display);
    }
}
