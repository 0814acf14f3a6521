//! Display bring-up for the 3.5" ST7796S SPI panel.
//!
//! Pin mapping (see `tft_rain_common::pins`):
//! - SCLK: GPIO10 (SPI1 CLK)
//! - MOSI: GPIO11 (SPI1 TX)
//! - CS: GPIO13
//! - DC: GPIO9
//! - RST: GPIO8
//!
//! The panel is write-only, so SPI runs TX-only and MISO is left unwired.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::Builder;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7796;
use mipidsi::options::{Orientation, Rotation};
use static_cell::StaticCell;
use tft_rain_common::config::{NATIVE_HEIGHT, NATIVE_WIDTH, SPI_FREQUENCY};

/// Bytes buffered per SPI transaction by the display interface.
const INTERFACE_BUFFER_SIZE: usize = 512;

/// Display type alias for the ST7796S on SPI1 with a hardware reset pin.
pub type TftDisplay = mipidsi::Display<
    SpiInterface<'static, ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, NoDelay>, Output<'static>>,
    ST7796,
    Output<'static>,
>;

static INTERFACE_BUFFER: StaticCell<[u8; INTERFACE_BUFFER_SIZE]> = StaticCell::new();

/// Initialize the ST7796S in landscape (480x320).
///
/// Must be called once; the interface buffer is a single static.
///
/// # Panics
///
/// If the panel does not come up. Nothing useful can run without it.
pub fn init_display(
    spi: Spi<'static, SPI1, Blocking>,
    cs: Output<'static>,
    dc: Output<'static>,
    rst: Output<'static>,
) -> TftDisplay {
    // Chip select on a GPIO cannot fail
    let Ok(spi_device) = ExclusiveDevice::new_no_delay(spi, cs);

    let buffer = INTERFACE_BUFFER.init([0; INTERFACE_BUFFER_SIZE]);
    let di = SpiInterface::new(spi_device, dc, buffer);

    // Native panel is 320x480 (portrait), rotate 90° for 480x320 (landscape)
    Builder::new(ST7796, di)
        .display_size(NATIVE_WIDTH, NATIVE_HEIGHT)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .reset_pin(rst)
        .init(&mut Delay)
        .unwrap_or_else(|_| panic!("ST7796 init failed"))
}

/// SPI configuration for the ST7796S.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = SPI_FREQUENCY;
    config
}
