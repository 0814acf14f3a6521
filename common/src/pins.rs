//! SPI pin mapping for the ST7796S panel on a Pico 2.
//!
//! The firmware binds the matching `PIN_n` peripherals by hand; this table is
//! what both programs report at startup so a miswired board is easy to spot.
//!
//! Wiring:
//! - MOSI: GPIO11 (SPI1 TX)
//! - SCLK: GPIO10 (SPI1 SCK)
//! - CS:   GPIO13
//! - DC:   GPIO9
//! - RST:  GPIO8
//! - MISO: not wired (the panel is write-only)

/// GPIO assignment for each display signal. `None` means the signal is not wired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    pub mosi: Option<u8>,
    pub sclk: Option<u8>,
    pub cs: Option<u8>,
    pub dc: Option<u8>,
    pub rst: Option<u8>,
    pub miso: Option<u8>,
}

/// Pin mapping used by the firmware.
pub const PIN_CONFIG: PinConfig = PinConfig {
    mosi: Some(11),
    sclk: Some(10),
    cs: Some(13),
    dc: Some(9),
    rst: Some(8),
    miso: None,
};

/// Header line printed before the pin list.
pub const PIN_REPORT_HEADER: &str = "TFT pin configuration:";

impl PinConfig {
    /// Wired pins as `(label, gpio)` in report order, skipping unwired signals.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u8)> {
        [
            ("MOSI", self.mosi),
            ("SCLK", self.sclk),
            ("CS", self.cs),
            ("DC", self.dc),
            ("RST", self.rst),
            ("MISO", self.miso),
        ]
        .into_iter()
        .filter_map(|(label, pin)| pin.map(|gpio| (label, gpio)))
    }
}
