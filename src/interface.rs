//! Hardware interface abstraction
//!
//! The panel speaks a 9-bit serial protocol: a command/data bit followed by
//! an 8-bit payload. This module splits that into two layers:
//!
//! - [`BusTransport`] - the platform leaf: select line, data line, a single
//!   clock pulse, and a byte shift. Implementations live in [`crate::bus`].
//! - [`send_frame`] - the platform-independent framing sequence built on it.
//!
//! [`DisplayInterface`] is what the [`Display`](crate::display::Display)
//! talks to; [`Interface`] implements it on any `BusTransport` plus a reset
//! pin.
//!
//! ## Frame Sequence
//!
//! 1. Assert chip-select
//! 2. Drive the data line: high for data, low for a command
//! 3. Pulse the clock low then high, latching that framing bit
//! 4. Shift the byte out MSB first
//! 5. Deassert chip-select
//!
//! ## Example
//!
//! ```rust,no_run
//! use nokia6100_lcd::{BitBangBus, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let bus = BitBangBus::new(MockPin, MockPin, MockPin);
//! let mut interface = Interface::new(bus, MockPin);
//!
//! // Page range 0..=131
//! let _ = interface.send_command(0x2B);
//! let _ = interface.send_data(&[0, 131]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Reset pulse width and settle time, in milliseconds
pub const RESET_PULSE_MS: u32 = 10;

/// Kind of a 9-bit frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Opcode byte
    Command,
    /// Parameter or pixel byte
    Data,
}

impl Frame {
    /// Level of the framing bit: high for data, low for commands
    pub const fn data_line_level(self) -> bool {
        match self {
            Self::Command => false,
            Self::Data => true,
        }
    }
}

/// Platform leaf of the serial bus
///
/// Each method is one electrical step of a frame; [`send_frame`] sequences
/// them. Implementations must not return from [`shift_byte`](Self::shift_byte)
/// before the byte has been clocked out completely.
pub trait BusTransport {
    /// Error type for bus operations
    type Error: Debug;

    /// Put every line in its rest state: deselected, data low, clock high
    fn idle(&mut self) -> Result<(), Self::Error>;

    /// Assert chip-select
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Deassert chip-select
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Drive the data line
    fn set_data_line(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Drive the clock low, then high
    fn pulse_clock(&mut self) -> Result<(), Self::Error>;

    /// Shift one byte out, MSB first, and wait for completion
    fn shift_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Send one complete 9-bit frame
///
/// Returns once the byte has been shifted and chip-select released.
/// Chip-select is released even when a step fails; the first error wins.
pub fn send_frame<B: BusTransport>(bus: &mut B, frame: Frame, byte: u8) -> Result<(), B::Error> {
    bus.select()?;
    let sent = bus
        .set_data_line(frame.data_line_level())
        .and_then(|()| bus.pulse_clock())
        .and_then(|()| bus.shift_byte(byte));
    let released = bus.deselect();
    sent.and(released)
}

/// Trait for the command/data link to the controller
///
/// This trait abstracts over different hardware implementations, allowing
/// the [`Display`](crate::display::Display) to work with anything that can
/// deliver framed bytes. Use [`Interface`] unless you need something custom.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send one byte as a command frame
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send every byte of `data` as its own data frame
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must:
    /// 1. Put the bus in its rest state
    /// 2. Set RST low for at least [`RESET_PULSE_MS`]
    /// 3. Set RST high and wait at least [`RESET_PULSE_MS`]
    fn reset<D: DelayNs>(&mut self, delay: &mut D);
}

/// Hardware interface implementation
///
/// Frames every byte over a [`BusTransport`] and owns the reset line.
///
/// ## Type Parameters
///
/// * `B` - Serial bus implementing [`BusTransport`]
/// * `RST` - Reset pin implementing [`OutputPin`] (active low)
pub struct Interface<B, RST> {
    /// Serial bus
    bus: B,
    /// Reset pin (active low)
    rst: RST,
}

impl<B, RST> Interface<B, RST>
where
    B: BusTransport,
    RST: OutputPin,
{
    /// Create a new Interface
    pub fn new(bus: B, rst: RST) -> Self {
        Self { bus, rst }
    }

    /// Access the bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give back the bus and reset pin
    pub fn release(self) -> (B, RST) {
        (self.bus, self.rst)
    }
}

impl<B, RST> DisplayInterface for Interface<B, RST>
where
    B: BusTransport,
    RST: OutputPin,
{
    type Error = B::Error;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        send_frame(&mut self.bus, Frame::Command, command)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            send_frame(&mut self.bus, Frame::Data, byte)?;
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        if let Err(e) = self.bus.idle() {
            log::warn!("bus idle before reset failed: {:?}", e);
        }
        // Reset sequence: LOW -> wait -> HIGH -> wait
        let _ = self.rst.set_low();
        delay.delay_ms(RESET_PULSE_MS);
        let _ = self.rst.set_high();
        delay.delay_ms(RESET_PULSE_MS);
    }
}
