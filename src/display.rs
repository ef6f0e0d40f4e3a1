//! Core display operations
//!
//! [`Display`] owns the interface and the configuration and knows the
//! controller's addressing-window protocol:
//!
//! 1. Select a page range and a column range (both inclusive)
//! 2. Send the write opcode, then pixel pairs as data frames; the
//!    controller walks the window on its own
//! 3. Send a no-op so the last pixel is latched
//!
//! The window is never cached: every write sets its own.

use embedded_hal::delay::DelayNs;

use crate::color::PixelPair;
use crate::config::{Config, Geometry};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Inclusive page and column ranges for the next pixel stream
///
/// `start <= end` is the caller's job; the controller misbehaves otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressWindow {
    /// First page
    pub page_start: u8,
    /// Last page (inclusive)
    pub page_end: u8,
    /// First column
    pub column_start: u8,
    /// Last column (inclusive)
    pub column_end: u8,
}

impl AddressWindow {
    /// Window covering the whole visible screen
    pub fn full_screen(geometry: &Geometry) -> Self {
        Self {
            page_start: 0,
            page_end: geometry.height.saturating_sub(1),
            column_start: 0,
            column_end: geometry.width.saturating_sub(1),
        }
    }
}

/// Core display driver
///
/// Low-level window and stream operations. For text, wrap it in a
/// [`TextDisplay`](crate::text::TextDisplay).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Perform hardware reset and the controller power-up sequence
    ///
    /// Sequence: reset pulse, sleep out, booster on, color mode + depth,
    /// memory access + orientation, contrast + level, no-op, delay,
    /// display on.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingInitSequence` (before touching the bus) if the
    /// command set has no initialization opcodes.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let Some(init) = self.config.commands.init else {
            return Err(Error::MissingInitSequence);
        };

        log::debug!("lcd: reset");
        self.interface.reset(delay);

        log::debug!("lcd: init sequence");
        self.send_command(init.sleep_out)?;
        self.send_command(init.booster_on)?;

        self.send_command(init.color_mode)?;
        self.send_data(&[self.config.color_depth])?;

        self.send_command(init.memory_access)?;
        self.send_data(&[self.config.memory_access])?;

        self.send_command(init.contrast)?;
        self.send_data(&[self.config.contrast])?;

        self.send_command(self.config.commands.nop)?;
        delay.delay_ms(self.config.power_on_delay_ms);

        self.send_command(init.display_on)?;
        Ok(())
    }

    /// Select the page and column ranges for the next pixel stream
    pub fn set_address_window(&mut self, window: AddressWindow) -> DisplayResult<I> {
        log::trace!(
            "lcd: window pages {}..={} columns {}..={}",
            window.page_start,
            window.page_end,
            window.column_start,
            window.column_end
        );
        self.send_command(self.config.commands.set_page)?;
        self.send_data(&[window.page_start, window.page_end])?;
        self.send_command(self.config.commands.set_column)?;
        self.send_data(&[window.column_start, window.column_end])?;
        Ok(())
    }

    /// Stream pixel pairs into the current window
    ///
    /// Sends the write opcode once, every byte of every pair as a data frame,
    /// then the trailing no-op that latches the final pixel.
    pub fn write_stream<P>(&mut self, pairs: P) -> DisplayResult<I>
    where
        P: IntoIterator<Item = PixelPair>,
    {
        self.send_command(self.config.commands.write_data)?;
        for pair in pairs {
            self.send_data(&pair)?;
        }
        self.send_command(self.config.commands.nop)
    }

    /// Fill the whole screen with one packed pixel pair
    ///
    /// Sends `width * height / 2` pairs; on an odd pixel count the last
    /// pixel keeps its old value.
    pub fn clear_screen(&mut self, pair: PixelPair) -> DisplayResult<I> {
        let geometry = self.config.geometry;
        log::debug!("lcd: clear {} pairs", geometry.pixel_pairs());
        self.set_address_window(AddressWindow::full_screen(&geometry))?;
        self.write_stream(core::iter::repeat_n(pair, geometry.pixel_pairs() as usize))
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Get screen geometry
    pub fn geometry(&self) -> &Geometry {
        &self.config.geometry
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the interface
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }
}
