//! Text rendering on top of [`Display`]
//!
//! [`TextDisplay`] wraps a [`Display`] with the state text output needs:
//! foreground and background colors, the [`ColorCache`] derived from them,
//! and a packed [`Cursor`].
//!
//! Each glyph is drawn into its own addressing window (see
//! [`rotation`](crate::rotation)) as 16 pixel pairs, two bitmap bits per pair.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nokia6100_lcd::{BitBangBus, Builder, Color, Display, Interface, TextDisplay};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let bus = BitBangBus::new(MockPin, MockPin, MockPin);
//! let interface = Interface::new(bus, MockPin);
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut lcd = TextDisplay::new(Display::new(interface, config));
//! let _ = lcd.init(&mut delay);
//! lcd.set_color(Color::YELLOW);
//! lcd.set_background_color(Color::BLUE);
//! let _ = lcd.clear();
//! lcd.set_cursor(0, 3);
//! let _ = lcd.draw_text("ok");
//! ```

use embedded_hal::delay::DelayNs;

use crate::color::{Color, ColorCache};
use crate::cursor::Cursor;
use crate::display::Display;
use crate::error::Error;
use crate::font;
use crate::interface::DisplayInterface;
use crate::rotation::{cell_origin, glyph_window};

type TextResult<I> = core::result::Result<(), Error<I>>;

/// Character display
///
/// Owns the [`Display`] and keeps the color cache in step with the colors:
/// every color setter recomputes it, so drawing never sees stale pairs.
pub struct TextDisplay<I>
where
    I: DisplayInterface,
{
    display: Display<I>,
    foreground: Color,
    background: Color,
    cache: ColorCache,
    cursor: Cursor,
}

impl<I> TextDisplay<I>
where
    I: DisplayInterface,
{
    /// Wrap a display; white on black, cursor at the origin
    pub fn new(display: Display<I>) -> Self {
        Self {
            display,
            foreground: Color::WHITE,
            background: Color::BLACK,
            cache: ColorCache::new(Color::WHITE, Color::BLACK),
            cursor: Cursor::default(),
        }
    }

    /// Reset and power up the panel
    ///
    /// See [`Display::init`].
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> TextResult<I> {
        self.display.init(delay)
    }

    /// Set the text color
    pub fn set_color(&mut self, color: Color) {
        self.foreground = color;
        self.cache.recompute(self.foreground, self.background);
    }

    /// Set the background color, used by [`clear`](Self::clear) and glyph cells
    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
        self.cache.recompute(self.foreground, self.background);
    }

    /// Fill the screen with the background color and home the cursor
    pub fn clear(&mut self) -> TextResult<I> {
        self.display.clear_screen(self.cache.pair(0b00))?;
        self.cursor = Cursor::default();
        Ok(())
    }

    /// Move the cursor
    ///
    /// No range check: a `col` of 32 or more spills into the row bits.
    pub fn set_cursor(&mut self, row: u8, col: u8) {
        self.cursor = Cursor::new(row, col);
    }

    /// Draw one character at a text cell, leaving the cursor alone
    ///
    /// # Errors
    ///
    /// `Error::GlyphOutOfRange` for codes above 127, before any bus traffic.
    pub fn draw_char(&mut self, code: u8, col: u8, row: u8) -> TextResult<I> {
        let Some(bitmap) = font::glyph(code) else {
            log::warn!("lcd: no glyph for {:#04x}", code);
            return Err(Error::GlyphOutOfRange { code });
        };

        let (px, py) = cell_origin(col, row, self.display.geometry());
        log::trace!(
            "lcd: glyph {:#04x} at ({}, {}) -> ({}, {})",
            code,
            col,
            row,
            px,
            py
        );

        self.display.set_address_window(glyph_window(px, py))?;
        let cache = self.cache;
        self.display
            .write_stream(font::pair_indices(bitmap).map(|combo| cache.pair(combo)))
    }

    /// Draw a string at the cursor, advancing it one cell per character
    ///
    /// Stops at the end of `text` or at the first NUL byte. The cursor is
    /// not wrapped explicitly: past column 31 it carries into the next row.
    /// On error the cursor stays on the failing character.
    pub fn draw_text(&mut self, text: &str) -> TextResult<I> {
        for code in text.bytes().take_while(|&b| b != 0) {
            let col = self.cursor.col() as u8;
            let row = self.cursor.row() as u8;
            self.draw_char(code, col, row)?;
            self.cursor.advance();
        }
        Ok(())
    }

    /// Current cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current text color
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Current background color
    pub fn background(&self) -> Color {
        self.background
    }

    /// Pairs derived from the current colors
    pub fn color_cache(&self) -> &ColorCache {
        &self.cache
    }

    /// Access the underlying display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Mutable access to the underlying display
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Give back the display
    pub fn release(self) -> Display<I> {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{PixelPair, pack_pair};
    use crate::command::CommandSet;
    use crate::config::Builder;
    use crate::display::tests::{MockInterface, Sent};
    use alloc::vec;
    use alloc::vec::Vec;

    fn text_display() -> TextDisplay<MockInterface> {
        let config = Builder::new().build().unwrap();
        TextDisplay::new(Display::new(MockInterface::default(), config))
    }

    fn sent(lcd: &mut TextDisplay<MockInterface>) -> Vec<Sent> {
        core::mem::take(&mut lcd.display_mut().interface_mut().sent)
    }

    fn expected_glyph(
        cache: &ColorCache,
        code: u8,
        pages: (u8, u8),
        columns: (u8, u8),
    ) -> Vec<Sent> {
        let mut expected = vec![
            Sent::Command(0x2B),
            Sent::Data(pages.0),
            Sent::Data(pages.1),
            Sent::Command(0x2A),
            Sent::Data(columns.0),
            Sent::Data(columns.1),
            Sent::Command(0x2C),
        ];
        let bitmap = font::glyph(code).unwrap();
        for combo in font::pair_indices(bitmap) {
            expected.extend(cache.pair(combo).iter().map(|&b| Sent::Data(b)));
        }
        expected.push(Sent::Command(0x00));
        expected
    }

    #[test]
    fn test_defaults() {
        let lcd = text_display();
        assert_eq!(lcd.foreground(), Color::WHITE);
        assert_eq!(lcd.background(), Color::BLACK);
        assert_eq!(lcd.cursor().raw(), 0);
        assert_eq!(lcd.color_cache().pair(0b11), [0xFF, 0xFF, 0xFF]);
        assert_eq!(lcd.color_cache().pair(0b00), [0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_color_setters_refresh_cache() {
        let mut lcd = text_display();
        lcd.set_color(Color::new(0xFF0));
        assert_eq!(*lcd.color_cache(), ColorCache::new(Color::new(0xFF0), Color::BLACK));
        lcd.set_background_color(Color::new(0x00F));
        assert_eq!(
            *lcd.color_cache(),
            ColorCache::new(Color::new(0xFF0), Color::new(0x00F))
        );
        assert_eq!(
            lcd.color_cache().pair(0b10),
            pack_pair(Color::new(0xFF0), Color::new(0x00F))
        );
    }

    #[test]
    fn test_glyph_drawn_with_current_colors() {
        let mut lcd = text_display();
        lcd.set_color(Color::RED);
        lcd.draw_char(b'A', 0, 0).unwrap();
        let red_on_black = sent(&mut lcd);

        lcd.set_background_color(Color::GREEN);
        lcd.draw_char(b'A', 0, 0).unwrap();
        let red_on_green = sent(&mut lcd);

        let cache = ColorCache::new(Color::RED, Color::GREEN);
        assert_eq!(red_on_green, expected_glyph(&cache, b'A', (125, 130), (2, 9)));
        assert_ne!(red_on_black, red_on_green);
    }

    #[test]
    fn test_draw_char_window_and_stream() {
        let mut lcd = text_display();
        lcd.draw_char(b'o', 3, 0).unwrap();
        let cache = *lcd.color_cache();
        assert_eq!(sent(&mut lcd), expected_glyph(&cache, b'o', (113, 118), (2, 9)));
        // Drawing a char never moves the cursor
        assert_eq!(lcd.cursor().raw(), 0);
    }

    #[test]
    fn test_draw_char_rejects_high_codes() {
        let mut lcd = text_display();
        let result = lcd.draw_char(0x80, 0, 0);
        assert!(matches!(result, Err(Error::GlyphOutOfRange { code: 0x80 })));
        assert!(sent(&mut lcd).is_empty());
    }

    #[test]
    fn test_draw_text_stops_on_error() {
        let mut lcd = text_display();
        let result = lcd.draw_text("a\u{e9}b");
        assert!(matches!(result, Err(Error::GlyphOutOfRange { code: 0xC3 })));
        assert_eq!(lcd.cursor().raw(), 1);
    }

    #[test]
    fn test_draw_text_stops_at_nul() {
        let mut lcd = text_display();
        lcd.draw_text("ab\0cd").unwrap();
        assert_eq!(lcd.cursor().raw(), 2);
        let writes = sent(&mut lcd)
            .iter()
            .filter(|s| **s == Sent::Command(0x2C))
            .count();
        assert_eq!(writes, 2);
    }

    #[test]
    fn test_cursor_wraps_into_next_row() {
        let mut lcd = text_display();
        lcd.draw_text("0123456789abcdefghijklmnopqrstuv").unwrap();
        let cursor = lcd.cursor();
        assert_eq!(cursor.raw(), 32);
        assert_eq!((cursor.row(), cursor.col()), (1, 0));

        // Next glyph lands on row 1, column 0
        sent(&mut lcd);
        lcd.draw_text("x").unwrap();
        let cache = *lcd.color_cache();
        assert_eq!(sent(&mut lcd), expected_glyph(&cache, b'x', (125, 130), (10, 17)));
    }

    #[test]
    fn test_rows_past_255_wrap_to_8_bits() {
        let mut lcd = text_display();
        lcd.cursor = Cursor::from_raw(256 << 5);
        lcd.draw_text("x").unwrap();

        // Row 256 draws where row 0 does
        let cache = *lcd.color_cache();
        assert_eq!(sent(&mut lcd), expected_glyph(&cache, b'x', (125, 130), (2, 9)));
        assert_eq!(lcd.cursor().raw(), (256 << 5) + 1);
        assert_eq!(lcd.cursor().row(), 256);
    }

    #[test]
    fn test_clear_homes_cursor() {
        let mut lcd = text_display();
        lcd.set_cursor(4, 7);
        lcd.clear().unwrap();
        assert_eq!(lcd.cursor().raw(), 0);
    }

    #[test]
    fn test_ok_scenario() {
        let mut lcd = text_display();
        lcd.set_color(Color::new(0xFF0));
        lcd.set_background_color(Color::new(0x00F));
        lcd.clear().unwrap();
        let cleared = sent(&mut lcd);

        let background: PixelPair = pack_pair(Color::new(0x00F), Color::new(0x00F));
        let stream = &cleared[7..cleared.len() - 1];
        assert!(stream.iter().all(|s| matches!(s, Sent::Data(_))));
        let pixels: Vec<u8> = stream
            .iter()
            .filter_map(|s| match s {
                Sent::Data(b) => Some(*b),
                Sent::Command(_) => None,
            })
            .collect();
        assert_eq!(pixels.len(), 8_646 * 3);
        assert!(pixels.chunks(3).all(|pair| pair == background));

        lcd.set_cursor(0, 3);
        lcd.draw_text("ok").unwrap();
        let cache = *lcd.color_cache();
        let mut expected = expected_glyph(&cache, b'o', (113, 118), (2, 9));
        expected.extend(expected_glyph(&cache, b'k', (109, 114), (2, 9)));
        assert_eq!(sent(&mut lcd), expected);
        assert_eq!(lcd.cursor().raw(), 5);
    }

    #[test]
    fn test_epson_opcodes_in_glyph() {
        let config = Builder::new().commands(CommandSet::EPSON).build().unwrap();
        let mut lcd = TextDisplay::new(Display::new(MockInterface::default(), config));
        lcd.draw_char(b' ', 0, 0).unwrap();
        let commands = lcd.release().release().commands();
        assert_eq!(commands, vec![0x75, 0x15, 0x5C, 0x25]);
    }
}
