//! Error types for the driver
//!
//! The panel has no status channel, so nothing here reports a device fault.
//! Errors come from the host side:
//!
//! - [`Error`] - runtime errors from display and text operations
//! - [`BuilderError`] - errors during configuration construction
//! - [`BusError`](crate::bus::BusError) - low-level pin and shift engine errors
//!
//! ## Example
//!
//! ```
//! use nokia6100_lcd::{Builder, BuilderError, Geometry};
//!
//! // Zero-sized screen
//! let result = Geometry::new(0, 132);
//! assert!(matches!(result, Err(BuilderError::InvalidGeometry { .. })));
//!
//! // Margin outside the screen
//! let geometry = Geometry::REFERENCE.with_offsets(200, 2);
//! let result = Builder::new().geometry(geometry).build();
//! assert!(matches!(result, Err(BuilderError::InvalidOffset { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when driving the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (pins, shift engine)
    ///
    /// Wraps the underlying error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Character code has no glyph
    ///
    /// The font covers codes 0..=127. The glyph is rejected before any bus
    /// traffic for it.
    GlyphOutOfRange {
        /// Offending character code
        code: u8,
    },
    /// The command set carries no initialization opcodes
    ///
    /// Provide them with [`CommandSet::with_init`](crate::CommandSet::with_init).
    MissingInitSequence,
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::GlyphOutOfRange { code } => write!(f, "No glyph for character code {code:#04x}"),
            Self::MissingInitSequence => write!(f, "Command set has no initialization opcodes"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Width or height is zero
    InvalidGeometry {
        /// Requested width
        width: u8,
        /// Requested height
        height: u8,
    },
    /// A text margin does not fit on the screen
    InvalidOffset {
        /// Requested column margin
        x_offset: u8,
        /// Requested page margin
        y_offset: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidGeometry { width, height } => {
                write!(f, "Invalid geometry {width}x{height}")
            }
            Self::InvalidOffset { x_offset, y_offset } => {
                write!(f, "Invalid text offset ({x_offset}, {y_offset})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
