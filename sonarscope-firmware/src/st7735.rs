//! ST7735 TFT Display Driver
//!
//! Driver for 160x128 ST7735-based TFT panels via SPI. Keeps a full
//! RGB565 frame buffer in RAM; drawing is synchronous into the buffer
//! (it implements `embedded_graphics::DrawTarget`) and `flush` sends
//! the whole frame to the panel asynchronously.

use core::convert::Infallible;

use embassy_rp::gpio::Output;
use embassy_time::Timer;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565};
use embedded_graphics::Pixel;
use embedded_hal_async::spi::SpiBus;

/// Display dimensions in the landscape orientation
pub const WIDTH: usize = 160;
pub const HEIGHT: usize = 128;

/// Frame buffer size (16 bits per pixel)
pub const FRAME_BYTES: usize = WIDTH * HEIGHT * 2;

/// ST7735 commands
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// Memory access control: row/column exchange + row mirror
///
/// Puts the panel in 160x128 landscape with the pivot edge at the top
/// (the rotate-270 orientation).
const MADCTL_LANDSCAPE: u8 = 0xA0;

/// 16-bit color interface
const COLMOD_RGB565: u8 = 0x05;

/// ST7735 TFT driver
pub struct St7735<SPI> {
    spi: SPI,
    dc: Output<'static>,
    cs: Output<'static>,
    rst: Output<'static>,
    /// Frame buffer (RGB565 big-endian, row major)
    buffer: &'static mut [u8; FRAME_BYTES],
}

impl<SPI> St7735<SPI>
where
    SPI: SpiBus<u8>,
{
    /// Create a new driver over an SPI bus and control pins
    ///
    /// The buffer must live forever; the firmware allocates it in a
    /// `StaticCell`.
    pub fn new(
        spi: SPI,
        dc: Output<'static>,
        cs: Output<'static>,
        rst: Output<'static>,
        buffer: &'static mut [u8; FRAME_BYTES],
    ) -> Self {
        Self {
            spi,
            dc,
            cs,
            rst,
            buffer,
        }
    }

    /// Initialize the panel
    pub async fn init(&mut self) -> Result<(), SPI::Error> {
        // Hardware reset pulse
        self.rst.set_high();
        Timer::after_millis(10).await;
        self.rst.set_low();
        Timer::after_millis(10).await;
        self.rst.set_high();
        Timer::after_millis(120).await;

        self.command(cmd::SWRESET).await?;
        Timer::after_millis(150).await;
        self.command(cmd::SLPOUT).await?;
        Timer::after_millis(120).await;

        self.command(cmd::COLMOD).await?;
        self.data(&[COLMOD_RGB565]).await?;
        self.command(cmd::MADCTL).await?;
        self.data(&[MADCTL_LANDSCAPE]).await?;

        self.command(cmd::INVOFF).await?;
        self.command(cmd::NORON).await?;
        self.command(cmd::DISPON).await?;
        Timer::after_millis(20).await;

        Ok(())
    }

    /// Send a command byte
    async fn command(&mut self, c: u8) -> Result<(), SPI::Error> {
        self.cs.set_low();
        self.dc.set_low();
        let result = self.spi.write(&[c]).await;
        self.cs.set_high();
        result
    }

    /// Send data bytes
    async fn data(&mut self, bytes: &[u8]) -> Result<(), SPI::Error> {
        self.cs.set_low();
        self.dc.set_high();
        let result = self.spi.write(bytes).await;
        self.cs.set_high();
        result
    }

    /// Address the full screen for a RAM write
    async fn set_full_window(&mut self) -> Result<(), SPI::Error> {
        self.command(cmd::CASET).await?;
        self.data(&[0, 0, 0, (WIDTH - 1) as u8]).await?;
        self.command(cmd::RASET).await?;
        self.data(&[0, 0, 0, (HEIGHT - 1) as u8]).await?;
        Ok(())
    }

    /// Send the frame buffer to the panel
    pub async fn flush(&mut self) -> Result<(), SPI::Error> {
        self.set_full_window().await?;
        self.command(cmd::RAMWR).await?;

        self.cs.set_low();
        self.dc.set_high();
        let result = self.spi.write(&self.buffer[..]).await;
        self.cs.set_high();
        result
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let offset = (y * WIDTH + x) * 2;
        let raw = color.into_storage().to_be_bytes();
        self.buffer[offset] = raw[0];
        self.buffer[offset + 1] = raw[1];
    }
}

impl<SPI> OriginDimensions for St7735<SPI> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<SPI> DrawTarget for St7735<SPI>
where
    SPI: SpiBus<u8>,
{
    type Color = Rgb565;
    // Buffer writes cannot fail; transport errors surface in flush().
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Infallible>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(point, color) in pixels {
            if (0..WIDTH as i32).contains(&point.x) && (0..HEIGHT as i32).contains(&point.y) {
                self.set_pixel(point.x as usize, point.y as usize, color);
            }
        }
        Ok(())
    }
}
