//! Pinax - TFT Label Panel Firmware
//!
//! Main firmware binary for RP2040 boards driving an ST7796S TFT panel
//! over SPI. Brings up the panel, paints a static greeting and keeps the
//! screen refreshed from a single cooperative render loop.
//!
//! Named after the Greek "pinax" (πίναξ) meaning "painted panel" -
//! the votive tablets hung in ancient sanctuaries.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Timer};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use pinax_core::buffer::DrawBuffer;
use pinax_core::flush::FlushAdapter;
use pinax_core::ui::Ui;
use pinax_drivers::backlight::Backlight;
use pinax_drivers::tft::{Rotation, St7796};

use crate::config::{DRAW_BUF_PIXELS, FRAME_DELAY_MS, HOR_RES, SPI_FREQUENCY_HZ, VER_RES};

mod config;
mod gui;

// Render scratch buffer (must live forever, const-initialized so the
// whole array never transits the stack)
static DRAW_BUF: ConstStaticCell<[Rgb565; DRAW_BUF_PIXELS]> =
    ConstStaticCell::new([Rgb565::BLACK; DRAW_BUF_PIXELS]);

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Pinax firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // SPI0 on the usual Pico pins, panel control lines on the bank next
    // to it: CLK=GPIO18, MOSI=GPIO19, MISO=GPIO16 (unused by the panel,
    // the bus wants it anyway), CS=GPIO17, DC=GPIO20, RST=GPIO21,
    // backlight=GPIO22
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking(p.SPI0, p.PIN_18, p.PIN_19, p.PIN_16, spi_config);

    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);

    // Keep the panel dark until the first frame is on screen
    let mut backlight = Backlight::new_active_high(Output::new(p.PIN_22, Level::Low)).unwrap();

    let mut delay = Delay;
    let mut tft = St7796::new(spi, cs, dc, rst);
    tft.init(&mut delay).unwrap();
    tft.set_rotation(Rotation::Deg90).unwrap();
    info!("Panel initialized: {}x{}", tft.width(), tft.height());

    let buffer = DrawBuffer::new(DRAW_BUF.take());
    let mut ui = Ui::new(HOR_RES, VER_RES, buffer).unwrap();
    gui::build(&mut ui).unwrap();
    info!("Boot screen built");

    let mut adapter = FlushAdapter::new(tft);

    info!("Entering render loop");
    loop {
        match ui.tick(&mut adapter) {
            Ok(true) => {
                trace!("Frame presented");
                if !backlight.is_on() {
                    backlight.set_on(true).unwrap();
                    info!("Backlight on");
                }
            }
            Ok(false) => {}
            Err(e) => error!("Flush failed: {:?}", defmt::Debug2Format(&e)),
        }
        Timer::after_millis(FRAME_DELAY_MS).await;
    }
}
