//! Text cell to device coordinate remap
//!
//! The controller's origin sits in a corner that is rotated relative to
//! left-to-right, top-to-bottom text, with both axes swapped. A text cell
//! `(col, row)` therefore maps to:
//!
//! - device column `px = row * CHAR_HEIGHT + x_offset`
//! - device page `py = height - col * CHAR_WIDTH - y_offset`
//!
//! The glyph window spans pages `[py - CHAR_WIDTH - 1, py]` (glyph width)
//! and columns `[px, px + CHAR_HEIGHT - 1]` (glyph height).
//!
//! All arithmetic wraps in 8 bits like the controller's address registers:
//! cells off the screen give garbage windows, never a panic.
//!
//! ## Example
//!
//! ```
//! use nokia6100_lcd::Geometry;
//! use nokia6100_lcd::rotation::{cell_origin, glyph_window};
//!
//! let (px, py) = cell_origin(0, 0, &Geometry::REFERENCE);
//! assert_eq!((px, py), (2, 130));
//!
//! let window = glyph_window(px, py);
//! assert_eq!((window.page_start, window.page_end), (125, 130));
//! assert_eq!((window.column_start, window.column_end), (2, 9));
//! ```

use crate::config::Geometry;
use crate::display::AddressWindow;
use crate::font::{CHAR_HEIGHT, CHAR_WIDTH};

/// Device pixel origin `(px, py)` of the text cell at `(col, row)`
pub fn cell_origin(col: u8, row: u8, geometry: &Geometry) -> (u8, u8) {
    let px = row.wrapping_mul(CHAR_HEIGHT).wrapping_add(geometry.x_offset);
    let py = geometry
        .height
        .wrapping_sub(col.wrapping_mul(CHAR_WIDTH))
        .wrapping_sub(geometry.y_offset);
    (px, py)
}

/// Addressing window for a glyph whose origin is `(px, py)`
pub fn glyph_window(px: u8, py: u8) -> AddressWindow {
    AddressWindow {
        page_start: py.wrapping_sub(CHAR_WIDTH + 1),
        page_end: py,
        column_start: px,
        column_end: px.wrapping_add(CHAR_HEIGHT - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_origin() {
        let (px, py) = cell_origin(0, 0, &Geometry::REFERENCE);
        assert_eq!((px, py), (2, 130));
        assert_eq!(
            glyph_window(px, py),
            AddressWindow {
                page_start: 125,
                page_end: 130,
                column_start: 2,
                column_end: 9,
            }
        );
    }

    #[test]
    fn test_columns_move_down_pages() {
        // 'o' of the "ok" example sits at (3, 0)
        let (px, py) = cell_origin(3, 0, &Geometry::REFERENCE);
        assert_eq!((px, py), (2, 118));
        let (px, py) = cell_origin(4, 0, &Geometry::REFERENCE);
        assert_eq!((px, py), (2, 114));
    }

    #[test]
    fn test_rows_move_across_columns() {
        let (px, py) = cell_origin(0, 5, &Geometry::REFERENCE);
        assert_eq!((px, py), (42, 130));
        let window = glyph_window(px, py);
        assert_eq!((window.column_start, window.column_end), (42, 49));
    }

    #[test]
    fn test_offscreen_cells_wrap() {
        // 132 - 33 * 4 - 2 wraps below zero
        let (_, py) = cell_origin(33, 0, &Geometry::REFERENCE);
        assert_eq!(py, 254);
        let (px, _) = cell_origin(0, 40, &Geometry::REFERENCE);
        assert_eq!(px, 66);
        let window = glyph_window(250, 2);
        assert_eq!(window.page_start, 253);
        assert_eq!(window.column_end, 1);
    }
}
