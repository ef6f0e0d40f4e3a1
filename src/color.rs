//! 12-bit colors and two-pixel packing
//!
//! The controller runs in 12 bits per pixel. Pixels travel in pairs: two
//! 12-bit values packed into three bytes.
//!
//! | Byte | Bits 7..4          | Bits 3..0          |
//! |------|--------------------|--------------------|
//! | 0    | first pixel `[11:8]` | first pixel `[7:4]` |
//! | 1    | first pixel `[3:0]`  | second pixel `[11:8]` |
//! | 2    | second pixel `[7:4]` | second pixel `[3:0]` |
//!
//! Colors are stored as `0BGR`: blue in bits 11..8, green in 7..4, red in 3..0.
//!
//! ## Example
//!
//! ```
//! use nokia6100_lcd::color::{pack_pair, unpack_pair, Color};
//!
//! let bytes = pack_pair(Color::new(0xABC), Color::new(0x123));
//! assert_eq!(bytes, [0xAB, 0xC1, 0x23]);
//! assert_eq!(unpack_pair(bytes), (Color::new(0xABC), Color::new(0x123)));
//! ```

/// Three bytes carrying two packed pixels
pub type PixelPair = [u8; 3];

/// A 12-bit color in `0BGR` order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct Color(u16);

impl Color {
    /// All channels off
    pub const BLACK: Self = Self(0x000);
    /// All channels full
    pub const WHITE: Self = Self(0xFFF);
    /// Red channel only
    pub const RED: Self = Self(0x00F);
    /// Green channel only
    pub const GREEN: Self = Self(0x0F0);
    /// Blue channel only
    pub const BLUE: Self = Self(0xF00);
    /// Red + green
    pub const YELLOW: Self = Self(0x0FF);
    /// Green + blue
    pub const CYAN: Self = Self(0xFF0);
    /// Red + blue
    pub const MAGENTA: Self = Self(0xF0F);

    /// Create a color from a raw `0BGR` value
    ///
    /// Bits above bit 11 are dropped.
    pub const fn new(raw: u16) -> Self {
        Self(raw & 0x0FFF)
    }

    /// Create a color from 4-bit channels (each masked to 0..=15)
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((b as u16 & 0xF) << 8) | ((g as u16 & 0xF) << 4) | (r as u16 & 0xF))
    }

    /// Raw `0BGR` value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel, 0..=15
    pub const fn red(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// Green channel, 0..=15
    pub const fn green(self) -> u8 {
        ((self.0 >> 4) & 0xF) as u8
    }

    /// Blue channel, 0..=15
    pub const fn blue(self) -> u8 {
        ((self.0 >> 8) & 0xF) as u8
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.raw()
    }
}

/// Pack two pixels into the three-byte wire format
///
/// `first` lands in the first byte and a half, `second` in the rest.
pub const fn pack_pair(first: Color, second: Color) -> PixelPair {
    let p1 = first.0;
    let p0 = second.0;
    [
        ((p1 >> 4) & 0xFF) as u8,
        (((p1 & 0xF) << 4) | (p0 >> 8)) as u8,
        (p0 & 0xFF) as u8,
    ]
}

/// Inverse of [`pack_pair`]
pub const fn unpack_pair(bytes: PixelPair) -> (Color, Color) {
    let first = ((bytes[0] as u16) << 4) | ((bytes[1] as u16) >> 4);
    let second = (((bytes[1] as u16) & 0xF) << 8) | bytes[2] as u16;
    (Color(first), Color(second))
}

/// Pixel pairs for every on/off pattern of two pixels
///
/// Entry `n` (0..=3) covers the pattern whose bit 1 selects the first pixel
/// and bit 0 the second; a set bit picks the foreground, a clear bit the
/// background. Entries are laid out at a stride of 4 bytes, the fourth byte
/// is padding.
///
/// The cache only reflects the colors of the last [`recompute`](Self::recompute)
/// call; owners must recompute on every color change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColorCache {
    bytes: [u8; 16],
}

impl ColorCache {
    /// Bytes between consecutive entries
    pub const STRIDE: usize = 4;

    /// Build a cache for the given colors
    pub fn new(foreground: Color, background: Color) -> Self {
        let mut cache = Self { bytes: [0; 16] };
        cache.recompute(foreground, background);
        cache
    }

    /// Rebuild all four entries from the given colors
    pub fn recompute(&mut self, foreground: Color, background: Color) {
        for combo in 0..4 {
            let first = if combo & 0b10 != 0 {
                foreground
            } else {
                background
            };
            let second = if combo & 0b01 != 0 {
                foreground
            } else {
                background
            };
            let offset = combo * Self::STRIDE;
            self.bytes[offset..offset + 3].copy_from_slice(&pack_pair(first, second));
        }
    }

    /// Packed pair for a 2-bit pattern (only the low two bits of `combo` are used)
    pub fn pair(&self, combo: u8) -> PixelPair {
        let offset = (combo & 0b11) as usize * Self::STRIDE;
        [
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
        ]
    }

    /// Raw cache layout, padding included
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU16;
}

/// Keeps the top four bits of each channel
///
/// ```
/// use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
/// use nokia6100_lcd::Color;
///
/// assert_eq!(Color::from(Rgb888::new(0xFF, 0x80, 0x00)), Color::new(0x08F));
/// assert_eq!(Color::from(Rgb888::YELLOW), Color::YELLOW);
/// assert_eq!(Rgb888::from(Color::BLUE), Rgb888::BLUE);
/// ```
#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb888> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb888) -> Self {
        use embedded_graphics_core::pixelcolor::RgbColor;
        Self::from_rgb(color.r() >> 4, color.g() >> 4, color.b() >> 4)
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::RgbColor;
        Self::from_rgb(color.r() >> 1, color.g() >> 2, color.b() >> 1)
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb888 {
    fn from(color: Color) -> Self {
        // 0xF * 17 = 0xFF
        Self::new(color.red() * 17, color.green() * 17, color.blue() * 17)
    }
}
