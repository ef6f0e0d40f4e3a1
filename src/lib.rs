//! Nokia 6100 Color LCD Text Driver
//!
//! A driver for the 131x132 12-bit color LCD found on Nokia 6100 style
//! modules (Philips PCF8833 or Epson S1D15G10 controller), focused on
//! fast character output.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - 9-bit serial framing over a hardware shift engine or pure bit-banging
//! - Philips and Epson opcode sets, selected at run time
//! - 4x8 built-in font, 32-column text grid
//! - `embedded-graphics` color interop (with `graphics` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use nokia6100_lcd::{BitBangBus, Builder, Color, Display, Interface, TextDisplay};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (cs, sda, sck, rst) = (MockPin, MockPin, MockPin, MockPin);
//! # let mut delay = MockDelay;
//! let bus = BitBangBus::new(cs, sda, sck);
//! let interface = Interface::new(bus, rst);
//! let config = match Builder::new().contrast(0x38).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut lcd = TextDisplay::new(Display::new(interface, config));
//! let _ = lcd.init(&mut delay);
//! lcd.set_color(Color::WHITE);
//! lcd.set_background_color(Color::BLUE);
//! let _ = lcd.clear();
//! let _ = lcd.draw_text("Hello");
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Serial bus implementations
pub mod bus;
/// 12-bit colors and pixel pair packing
pub mod color;
/// Controller opcode tables
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Packed text cursor
pub mod cursor;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 4x8 font
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Text cell to device coordinate remap
pub mod rotation;
/// Text rendering
pub mod text;

pub use bus::{BitBangBus, BitOrder, BusError, HybridBus, ShiftConfig, ShiftEngine};
pub use color::{Color, ColorCache, PixelPair};
pub use command::{CommandSet, InitCommands};
pub use config::{Builder, Config, Geometry};
pub use cursor::Cursor;
pub use display::{AddressWindow, Display};
pub use error::{BuilderError, Error};
pub use interface::{BusTransport, DisplayInterface, Frame, Interface, send_frame};
pub use text::TextDisplay;
