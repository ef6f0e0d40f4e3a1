//! Built-in 4x8 font
//!
//! One `u32` bitmap per 7-bit character code. Each glyph cell is
//! [`CHAR_WIDTH`] pixels wide and [`CHAR_HEIGHT`] pixels tall, one bit per
//! pixel: columns go left to right, and inside a column bits run bottom to
//! top, starting at bit 0.
//!
//! Codes below 0x20 carry symbols (box drawing, shades, arrows) rather than
//! blanks.
//!
//! ## Example
//!
//! ```
//! use nokia6100_lcd::font::{glyph, pair_indices};
//!
//! let bitmap = glyph(b'!').unwrap_or(0);
//! assert_eq!(bitmap, 0x005f0000);
//! assert_eq!(pair_indices(bitmap).count(), 16);
//! assert!(glyph(0x80).is_none());
//! ```

/// Glyph cell width in pixels
pub const CHAR_WIDTH: u8 = 4;

/// Glyph cell height in pixels
pub const CHAR_HEIGHT: u8 = 8;

/// Number of glyphs in [`FONT`]
pub const GLYPH_COUNT: usize = 128;

/// Two-pixel steps needed to cover one glyph
pub const PAIRS_PER_GLYPH: usize = (CHAR_WIDTH as usize * CHAR_HEIGHT as usize) / 2;

/// Glyph bitmaps, indexed by character code
pub static FONT: [u32; GLYPH_COUNT] = [
    0x50262d27, 0x2d265000, 0x80408000, 0x00000000,
    0x242e2400, 0x082a0800, 0x00080000, 0x08080808,
    0x00ff0000, 0x00fc0404, 0x04fc0000, 0x080f0000,
    0x000f0808, 0x00ff0808, 0x08f80808, 0x08ff0000,
    0x080f0808, 0x08ff0808, 0x663399cc, 0x993366cc,
    0xfef8e080, 0x7f1f0701, 0x01071f7f, 0x80e0f8fe,
    0x5500aa00, 0x55aa55aa, 0xffaaff55, 0x0f0f0f0f,
    0xf0f0f0f0, 0x0000ffff, 0xffff0000, 0xffffffff,
    0x00000000, 0x005f0000, 0x07000700, 0x3f123f00,
    0x246b1200, 0x12082400, 0x36493650, 0x00040300,
    0x1c224100, 0x41221c00, 0x2a1c2a00, 0x081c0800,
    0x80600000, 0x08080800, 0x00400000, 0x601c0300,
    0x7e413f00, 0x427f4000, 0x72494600, 0x22493600,
    0x0f087f00, 0x27453900, 0x3e493200, 0x71090700,
    0x36493600, 0x26493e00, 0x00140000, 0x40340000,
    0x08142200, 0x14141400, 0x22140800, 0x01590600,
    0x3e594e00, 0x7e097e00, 0x7f493600, 0x3e414100,
    0x7f413e00, 0x7f494900, 0x7f090900, 0x3e413900,
    0x7f087f00, 0x417f4100, 0x60403f00, 0x7f1c6300,
    0x7f404000, 0x7f0e7f00, 0x7f017e00, 0x3e413e00,
    0x7f090600, 0x3e61be00, 0x7f097600, 0x46493100,
    0x017f0100, 0x3f407f00, 0x0f700f00, 0x7f387f00,
    0x77087700, 0x07780700, 0x71494700, 0x7f410000,
    0x031c6000, 0x00417f00, 0x02010200, 0x80808080,
    0x00030400, 0x64547800, 0x7f443800, 0x38444400,
    0x38447f00, 0x38545800, 0x047e0500, 0x98a47c00,
    0x7f047800, 0x007d0000, 0x80807d00, 0x7f106c00,
    0x007f0000, 0x7c187c00, 0x7c047800, 0x38443800,
    0xfc443800, 0x3844fc80, 0x78040400, 0x48542400,
    0x043f4400, 0x3c407c00, 0x1c701c00, 0x7c307c00,
    0x6c106c00, 0x9ca07c00, 0x64544c00, 0x08364100,
    0x00770000, 0x41360800, 0x08040804, 0x02050200,
];

/// Look up the bitmap for a character code
///
/// Returns `None` for codes outside 0..=127.
pub fn glyph(code: u8) -> Option<u32> {
    FONT.get(code as usize).copied()
}

/// Split a bitmap into its 16 two-pixel patterns, low bits first
///
/// Each item is 0..=3 and indexes a [`ColorCache`](crate::color::ColorCache)
/// entry.
pub fn pair_indices(bitmap: u32) -> impl Iterator<Item = u8> {
    (0..PAIRS_PER_GLYPH).map(move |step| ((bitmap >> (step * 2)) & 0b11) as u8)
}
