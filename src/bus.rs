//! Serial bus implementations
//!
//! Two [`BusTransport`] implementations over `embedded-hal` pins:
//!
//! - [`HybridBus`] drives the framing bit by hand, then hands the clock and
//!   data lines to a hardware shift engine for the 8 payload bits. Most
//!   MCU SPI blocks only shift whole bytes, so the 9th bit has to be
//!   bit-banged.
//! - [`BitBangBus`] clocks all nine bits in software. Slower, but needs
//!   nothing beyond three output pins.
//!
//! ## Hardware Requirements
//!
//! - **CS**: chip-select (output, active low)
//! - **SDA**: serial data (output)
//! - **SCK**: serial clock (output, idle high)
//! - **RST**: reset (output, active low), owned by [`Interface`](crate::Interface)

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{MODE_2, Mode};

use crate::interface::BusTransport;

/// Maximum serial clock accepted by the controller, in Hz
pub const MAX_CLOCK_HZ: u32 = 4_000_000;

/// Bit order of the shift engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BitOrder {
    /// Most significant bit first
    #[default]
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// Shift engine settings applied for every byte
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftConfig {
    /// Serial clock, in Hz
    pub frequency_hz: u32,
    /// Bit order
    pub bit_order: BitOrder,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl Default for ShiftConfig {
    /// 4 MHz, MSB first, clock idle high, capture on the falling edge
    fn default() -> Self {
        Self {
            frequency_hz: MAX_CLOCK_HZ,
            bit_order: BitOrder::MsbFirst,
            mode: MODE_2,
        }
    }
}

/// Byte-wide hardware shifter
///
/// Models an SPI block that owns the clock and data pins while enabled and
/// releases them to GPIO when disabled.
pub trait ShiftEngine {
    /// Error type for engine operations
    type Error: Debug;

    /// Take over the clock and data pins with the given settings
    fn enable(&mut self, config: &ShiftConfig) -> Result<(), Self::Error>;

    /// Start shifting one byte
    fn load(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Whether the last loaded byte has been shifted out
    fn is_complete(&mut self) -> Result<bool, Self::Error>;

    /// Release the clock and data pins back to GPIO
    fn disable(&mut self) -> Result<(), Self::Error>;
}

/// Errors that can occur at the bus level
///
/// Generic over the pin and shift engine error types.
#[derive(Debug, PartialEq, Eq)]
pub enum BusError<PinErr, ShiftErr> {
    /// GPIO pin error
    Pin(PinErr),
    /// Shift engine error
    Shift(ShiftErr),
    /// Shift engine did not report completion within the poll limit
    Timeout,
}

impl<PinErr: Debug, ShiftErr: Debug> core::fmt::Display for BusError<PinErr, ShiftErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Shift(e) => write!(f, "Shift engine error: {e:?}"),
            Self::Timeout => write!(f, "Timeout waiting for shift completion"),
        }
    }
}

impl<PinErr: Debug, ShiftErr: Debug> core::error::Error for BusError<PinErr, ShiftErr> {}

/// Manual framing bit + hardware byte shift
///
/// ## Type Parameters
///
/// * `CS` - Chip-select pin implementing [`OutputPin`]
/// * `SDA` - Data pin implementing [`OutputPin`], used while the engine is off
/// * `SCK` - Clock pin implementing [`OutputPin`], used while the engine is off
/// * `E` - Hardware shifter implementing [`ShiftEngine`]
pub struct HybridBus<CS, SDA, SCK, E> {
    cs: CS,
    sda: SDA,
    sck: SCK,
    engine: E,
    config: ShiftConfig,
    /// Completion polls before giving up, 0 = wait forever
    poll_limit: u32,
}

impl<CS, SDA, SCK, E, PinErr> HybridBus<CS, SDA, SCK, E>
where
    CS: OutputPin<Error = PinErr>,
    SDA: OutputPin<Error = PinErr>,
    SCK: OutputPin<Error = PinErr>,
    E: ShiftEngine,
{
    /// Create a bus with the default [`ShiftConfig`] and no poll limit
    pub fn new(cs: CS, sda: SDA, sck: SCK, engine: E) -> Self {
        Self {
            cs,
            sda,
            sck,
            engine,
            config: ShiftConfig::default(),
            poll_limit: 0,
        }
    }

    /// Replace the shift engine settings
    pub fn set_shift_config(&mut self, config: ShiftConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Current shift engine settings
    pub fn shift_config(&self) -> &ShiftConfig {
        &self.config
    }

    /// Set how many completion polls to wait before returning
    /// [`BusError::Timeout`]
    ///
    /// Default is 0, which polls forever: a stalled engine hangs the caller.
    pub fn set_poll_limit(&mut self, polls: u32) -> &mut Self {
        self.poll_limit = polls;
        self
    }

    /// Current poll limit (0 = unbounded)
    pub fn poll_limit(&self) -> u32 {
        self.poll_limit
    }

    /// Give back the pins and engine
    pub fn release(self) -> (CS, SDA, SCK, E) {
        (self.cs, self.sda, self.sck, self.engine)
    }
}

impl<CS, SDA, SCK, E, PinErr> BusTransport for HybridBus<CS, SDA, SCK, E>
where
    CS: OutputPin<Error = PinErr>,
    SDA: OutputPin<Error = PinErr>,
    SCK: OutputPin<Error = PinErr>,
    E: ShiftEngine,
    PinErr: Debug,
{
    type Error = BusError<PinErr, E::Error>;

    fn idle(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(BusError::Pin)?;
        self.sda.set_low().map_err(BusError::Pin)?;
        self.sck.set_high().map_err(BusError::Pin)
    }

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(BusError::Pin)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(BusError::Pin)
    }

    fn set_data_line(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.sda.set_high().map_err(BusError::Pin)
        } else {
            self.sda.set_low().map_err(BusError::Pin)
        }
    }

    fn pulse_clock(&mut self) -> Result<(), Self::Error> {
        self.sck.set_low().map_err(BusError::Pin)?;
        self.sck.set_high().map_err(BusError::Pin)
    }

    fn shift_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.engine.enable(&self.config).map_err(BusError::Shift)?;
        self.engine.load(byte).map_err(BusError::Shift)?;

        let mut polls = 0u32;
        while !self.engine.is_complete().map_err(BusError::Shift)? {
            polls += 1;
            if self.poll_limit > 0 && polls >= self.poll_limit {
                log::warn!("shift engine stalled after {} polls", polls);
                let _ = self.engine.disable();
                return Err(BusError::Timeout);
            }
            core::hint::spin_loop();
        }

        self.engine.disable().map_err(BusError::Shift)
    }
}

/// All nine bits in software
///
/// The clock idles high; every bit is set up on the data line and latched
/// with a low-high clock pulse.
pub struct BitBangBus<CS, SDA, SCK> {
    cs: CS,
    sda: SDA,
    sck: SCK,
}

impl<CS, SDA, SCK, PinErr> BitBangBus<CS, SDA, SCK>
where
    CS: OutputPin<Error = PinErr>,
    SDA: OutputPin<Error = PinErr>,
    SCK: OutputPin<Error = PinErr>,
{
    /// Create a new bit-banged bus
    pub fn new(cs: CS, sda: SDA, sck: SCK) -> Self {
        Self { cs, sda, sck }
    }

    /// Give back the pins
    pub fn release(self) -> (CS, SDA, SCK) {
        (self.cs, self.sda, self.sck)
    }
}

impl<CS, SDA, SCK, PinErr> BusTransport for BitBangBus<CS, SDA, SCK>
where
    CS: OutputPin<Error = PinErr>,
    SDA: OutputPin<Error = PinErr>,
    SCK: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = BusError<PinErr, core::convert::Infallible>;

    fn idle(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(BusError::Pin)?;
        self.sda.set_low().map_err(BusError::Pin)?;
        self.sck.set_high().map_err(BusError::Pin)
    }

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(BusError::Pin)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(BusError::Pin)
    }

    fn set_data_line(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.sda.set_high().map_err(BusError::Pin)
        } else {
            self.sda.set_low().map_err(BusError::Pin)
        }
    }

    fn pulse_clock(&mut self) -> Result<(), Self::Error> {
        self.sck.set_low().map_err(BusError::Pin)?;
        self.sck.set_high().map_err(BusError::Pin)
    }

    fn shift_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        for bit in (0..8).rev() {
            self.set_data_line(byte & (1 << bit) != 0)?;
            self.pulse_clock()?;
        }
        Ok(())
    }
}
