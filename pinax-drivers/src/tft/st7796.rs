//! ST7796S TFT Display Driver
//!
//! Driver for 480x320 ST7796S-based panels on 4-wire SPI (clock, data,
//! DC, CS) plus a reset line. Implements the core pixel transport: one
//! chip-select transaction per flushed region, window addressing via
//! CASET/PASET, pixel data streamed big-endian into RAMWR.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::IntoStorage;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use pinax_core::geometry::Area;
use pinax_core::transport::PixelTransport;

/// Panel dimensions in its native portrait orientation
const NATIVE_WIDTH: u16 = 320;
const NATIVE_HEIGHT: u16 = 480;

/// Pixels re-encoded per SPI burst
const STAGE_PIXELS: usize = 64;

/// ST7796S commands
#[allow(dead_code)]
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const PASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
    pub const CSCON: u8 = 0xF0;
}

/// MADCTL memory access bits
mod madctl {
    pub const MY: u8 = 0x80;
    pub const MX: u8 = 0x40;
    pub const MV: u8 = 0x20;
    pub const BGR: u8 = 0x08;
}

/// Driver faults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TftError<E> {
    /// SPI transfer failed
    Spi(E),
    /// A control pin (CS, DC or RST) refused to switch
    Pin,
}

/// Panel rotation
///
/// The panel is natively portrait (320x480); `Deg90` and `Deg270` give
/// landscape (480x320).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// MADCTL value selecting this rotation (BGR panel)
    pub fn madctl(self) -> u8 {
        match self {
            Rotation::Deg0 => madctl::MX | madctl::BGR,
            Rotation::Deg90 => madctl::MV | madctl::BGR,
            Rotation::Deg180 => madctl::MY | madctl::BGR,
            Rotation::Deg270 => madctl::MY | madctl::MX | madctl::MV | madctl::BGR,
        }
    }

    /// Logical (width, height) under this rotation
    pub fn size(self) -> (u16, u16) {
        match self {
            Rotation::Deg0 | Rotation::Deg180 => (NATIVE_WIDTH, NATIVE_HEIGHT),
            Rotation::Deg90 | Rotation::Deg270 => (NATIVE_HEIGHT, NATIVE_WIDTH),
        }
    }
}

/// ST7796S driver over blocking SPI
///
/// The driver owns its bus and control pins; there is no shared global
/// state. Chip-select is asserted for a whole transport transaction and
/// released at its end, matching how the flush adapter drives it.
pub struct St7796<SPI, CS, DC, RST> {
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
    rotation: Rotation,
}

impl<SPI, CS, DC, RST> St7796<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates the driver in native portrait orientation.
    ///
    /// No bus traffic yet; call [`init`](Self::init) before drawing.
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            rotation: Rotation::Deg0,
        }
    }

    /// Logical width under the current rotation.
    pub fn width(&self) -> u16 {
        self.rotation.size().0
    }

    /// Logical height under the current rotation.
    pub fn height(&self) -> u16 {
        self.rotation.size().1
    }

    /// Current rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Wakes and configures the panel.
    ///
    /// Hardware reset pulse, then soft reset, sleep-out, pixel format
    /// (16-bit RGB565) and memory access order, with the settle delays
    /// the controller requires between reset, wake and display-on.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), TftError<SPI::Error>> {
        self.hardware_reset(delay)?;

        self.select()?;
        self.command(cmd::SWRESET)?;
        delay.delay_ms(120);
        self.command(cmd::SLPOUT)?;
        delay.delay_ms(120);

        // Unlock the command set for configuration
        self.command(cmd::CSCON)?;
        self.data(&[0xC3])?;
        self.command(cmd::CSCON)?;
        self.data(&[0x96])?;

        self.command(cmd::MADCTL)?;
        self.data(&[self.rotation.madctl()])?;
        self.command(cmd::COLMOD)?;
        self.data(&[0x55])?;

        // Lock it again
        self.command(cmd::CSCON)?;
        self.data(&[0x3C])?;
        self.command(cmd::CSCON)?;
        self.data(&[0x69])?;

        self.command(cmd::NORON)?;
        self.command(cmd::DISPON)?;
        delay.delay_ms(120);

        self.spi.flush().map_err(TftError::Spi)?;
        self.deselect()
    }

    /// Changes the rotation, updating the panel's memory access order.
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<(), TftError<SPI::Error>> {
        self.rotation = rotation;
        self.select()?;
        self.command(cmd::MADCTL)?;
        self.data(&[rotation.madctl()])?;
        self.spi.flush().map_err(TftError::Spi)?;
        self.deselect()
    }

    fn hardware_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), TftError<SPI::Error>> {
        self.rst.set_high().map_err(|_| TftError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_low().map_err(|_| TftError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(|_| TftError::Pin)?;
        delay.delay_ms(120);
        Ok(())
    }

    fn select(&mut self) -> Result<(), TftError<SPI::Error>> {
        self.cs.set_low().map_err(|_| TftError::Pin)
    }

    fn deselect(&mut self) -> Result<(), TftError<SPI::Error>> {
        self.cs.set_high().map_err(|_| TftError::Pin)
    }

    /// Sends a command byte (DC low).
    fn command(&mut self, op: u8) -> Result<(), TftError<SPI::Error>> {
        self.dc.set_low().map_err(|_| TftError::Pin)?;
        self.spi.write(&[op]).map_err(TftError::Spi)
    }

    /// Sends parameter bytes (DC high).
    fn data(&mut self, bytes: &[u8]) -> Result<(), TftError<SPI::Error>> {
        self.dc.set_high().map_err(|_| TftError::Pin)?;
        self.spi.write(bytes).map_err(TftError::Spi)
    }
}

impl<SPI, CS, DC, RST> PixelTransport for St7796<SPI, CS, DC, RST>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = TftError<SPI::Error>;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.select()
    }

    fn set_window(&mut self, area: &Area) -> Result<(), Self::Error> {
        let [x1h, x1l] = area.x1.to_be_bytes();
        let [x2h, x2l] = area.x2.to_be_bytes();
        self.command(cmd::CASET)?;
        self.data(&[x1h, x1l, x2h, x2l])?;

        let [y1h, y1l] = area.y1.to_be_bytes();
        let [y2h, y2l] = area.y2.to_be_bytes();
        self.command(cmd::PASET)?;
        self.data(&[y1h, y1l, y2h, y2l])?;

        self.command(cmd::RAMWR)
    }

    fn push_pixels(&mut self, pixels: &[Rgb565]) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(|_| TftError::Pin)?;

        // The controller wants big-endian words; re-encode through a
        // small staging buffer per burst.
        let mut stage = [0u8; STAGE_PIXELS * 2];
        for chunk in pixels.chunks(STAGE_PIXELS) {
            for (slot, px) in stage.chunks_exact_mut(2).zip(chunk) {
                slot.copy_from_slice(&px.into_storage().to_be_bytes());
            }
            self.spi
                .write(&stage[..chunk.len() * 2])
                .map_err(TftError::Spi)?;
        }
        Ok(())
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        self.spi.flush().map_err(TftError::Spi)?;
        self.deselect()
    }
}
