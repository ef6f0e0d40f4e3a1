//! Packed text cursor
//!
//! The cursor is a single integer holding `(row << 5) | col`, a 32-column
//! text grid. Drawing a character adds one to the integer, so advancing
//! past column 31 carries into the row field: column 31 of row `r` is
//! followed by column 0 of row `r + 1`. Nothing is range-checked.
//!
//! ## Example
//!
//! ```
//! use nokia6100_lcd::Cursor;
//!
//! let mut cursor = Cursor::new(0, 31);
//! cursor.advance();
//! assert_eq!((cursor.row(), cursor.col()), (1, 0));
//! ```

/// Width of the column field in bits
pub const COLUMN_BITS: u32 = 5;

/// Number of text columns addressed by the column field
pub const COLUMNS: u32 = 1 << COLUMN_BITS;

const COLUMN_MASK: u32 = COLUMNS - 1;

/// Text cursor position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor(u32);

impl Cursor {
    /// Cursor at `(row, col)`
    ///
    /// `col` is OR-ed in unmasked, so a column of 32 or more also sets row bits.
    pub fn new(row: u8, col: u8) -> Self {
        Self(((row as u32) << COLUMN_BITS) | col as u32)
    }

    /// Cursor from its packed value
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Packed value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Text row (everything above the column field)
    pub const fn row(self) -> u32 {
        self.0 >> COLUMN_BITS
    }

    /// Text column, 0..=31
    pub const fn col(self) -> u32 {
        self.0 & COLUMN_MASK
    }

    /// Move to the next cell
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing() {
        let cursor = Cursor::new(2, 7);
        assert_eq!(cursor.raw(), (2 << 5) | 7);
        assert_eq!(cursor.row(), 2);
        assert_eq!(cursor.col(), 7);
    }

    #[test]
    fn test_32_advances_move_one_row() {
        let mut cursor = Cursor::default();
        for _ in 0..32 {
            cursor.advance();
        }
        assert_eq!(cursor.raw(), 32);
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.col(), 0);
    }

    #[test]
    fn test_wide_column_bleeds_into_row() {
        let cursor = Cursor::new(0, 33);
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.col(), 1);

        // OR, not add: row 1 | column 32 stays row 1
        let cursor = Cursor::new(1, 32);
        assert_eq!(cursor.raw(), 32);
        assert_eq!(cursor.row(), 1);
    }

    #[test]
    fn test_advance_wraps_without_panicking() {
        let mut cursor = Cursor::from_raw(u32::MAX);
        cursor.advance();
        assert_eq!(cursor, Cursor::default());
    }
}
