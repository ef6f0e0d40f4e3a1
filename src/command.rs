//! Controller command definitions
//!
//! The Nokia 6100 LCD ships with one of two controllers that speak the same
//! addressing-window protocol with different opcode values:
//!
//! - **Philips PCF8833** (the common one, default)
//! - **Epson S1D15G10**
//!
//! Opcodes are sent as command frames (framing bit = command), parameters as
//! data frames. The driver logic never hardcodes an opcode; it reads them
//! from a [`CommandSet`] picked when the [`Config`](crate::Config) is built.
//!
//! ## Example
//!
//! ```
//! use nokia6100_lcd::command::{self, CommandSet};
//!
//! let philips = CommandSet::PHILIPS;
//! assert_eq!(philips.set_page, command::philips::SET_PAGE);
//! assert!(philips.init.is_some());
//!
//! let epson = CommandSet::EPSON;
//! assert_eq!(epson.write_data, 0x5C);
//! assert!(epson.init.is_none());
//! ```

/// Philips PCF8833 opcodes
pub mod philips {
    // Addressing and memory

    /// Page address set (0x2B)
    ///
    /// Requires 2 bytes: [start, end], both inclusive.
    pub const SET_PAGE: u8 = 0x2B;

    /// Column address set (0x2A)
    ///
    /// Requires 2 bytes: [start, end], both inclusive.
    pub const SET_COLUMN: u8 = 0x2A;

    /// Memory write (0x2C)
    ///
    /// Every following data byte goes to display RAM, advancing through the
    /// current addressing window.
    pub const WRITE_DATA: u8 = 0x2C;

    /// No operation (0x00)
    ///
    /// Sent after a memory write so the final pixel is latched.
    pub const NOP: u8 = 0x00;

    // Initialization only

    /// Sleep out (0x11)
    pub const SLEEP_OUT: u8 = 0x11;

    /// Booster voltage on (0x03)
    pub const BOOSTER_ON: u8 = 0x03;

    /// Interface pixel format (0x3A)
    ///
    /// Requires 1 byte: 0x02 = 8 bits/pixel, 0x03 = 12 bits/pixel, 0x05 = 16 bits/pixel.
    pub const COLOR_MODE: u8 = 0x3A;

    /// Memory data access control (0x36)
    ///
    /// Requires 1 byte: mirror X/Y, vertical write, RGB/BGR order.
    pub const MEMORY_ACCESS: u8 = 0x36;

    /// Set contrast (0x25)
    ///
    /// Requires 1 byte, signed level.
    pub const CONTRAST: u8 = 0x25;

    /// Display on (0x29)
    pub const DISPLAY_ON: u8 = 0x29;
}

/// Epson S1D15G10 opcodes
pub mod epson {
    /// Page address set (0x75)
    pub const SET_PAGE: u8 = 0x75;

    /// Column address set (0x15)
    pub const SET_COLUMN: u8 = 0x15;

    /// Memory write (0x5C)
    pub const WRITE_DATA: u8 = 0x5C;

    /// No operation (0x25)
    pub const NOP: u8 = 0x25;
}

/// Opcodes used only by the one-time initialization sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitCommands {
    /// Leave sleep mode
    pub sleep_out: u8,
    /// Turn the booster circuit on
    pub booster_on: u8,
    /// Select interface color depth (followed by the depth byte)
    pub color_mode: u8,
    /// Memory access control (followed by the orientation byte)
    pub memory_access: u8,
    /// Contrast (followed by the level byte)
    pub contrast: u8,
    /// Turn the display on
    pub display_on: u8,
}

/// Opcode table for one controller family
///
/// Only the opcode values differ between families; everything that
/// consumes a `CommandSet` is opcode-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSet {
    /// Page range select
    pub set_page: u8,
    /// Column range select
    pub set_column: u8,
    /// Start of a pixel stream
    pub write_data: u8,
    /// No operation, used as the write latch
    pub nop: u8,
    /// Initialization opcodes, if known for this family
    pub init: Option<InitCommands>,
}

impl CommandSet {
    /// Philips PCF8833 command set
    pub const PHILIPS: Self = Self {
        set_page: philips::SET_PAGE,
        set_column: philips::SET_COLUMN,
        write_data: philips::WRITE_DATA,
        nop: philips::NOP,
        init: Some(InitCommands {
            sleep_out: philips::SLEEP_OUT,
            booster_on: philips::BOOSTER_ON,
            color_mode: philips::COLOR_MODE,
            memory_access: philips::MEMORY_ACCESS,
            contrast: philips::CONTRAST,
            display_on: philips::DISPLAY_ON,
        }),
    };

    /// Epson S1D15G10 command set
    ///
    /// No initialization opcodes are provided; supply them with
    /// [`CommandSet::with_init`] before calling `init`.
    pub const EPSON: Self = Self {
        set_page: epson::SET_PAGE,
        set_column: epson::SET_COLUMN,
        write_data: epson::WRITE_DATA,
        nop: epson::NOP,
        init: None,
    };

    /// Replace the initialization opcodes
    pub const fn with_init(mut self, init: InitCommands) -> Self {
        self.init = Some(init);
        self
    }
}

impl Default for CommandSet {
    fn default() -> Self {
        Self::PHILIPS
    }
}
