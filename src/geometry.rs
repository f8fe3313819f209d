//! Board layout and click-to-cell translation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Size of the drawn grid: three squares per side with two dividing lines.
///
/// Units are whatever the renderer draws in: pixels for an image, terminal
/// cells for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardGeometry {
    /// Width of one square.
    #[getter(copy)]
    square_width: u16,
    /// Height of one square.
    #[getter(copy)]
    square_height: u16,
    /// Thickness of the lines between squares.
    #[getter(copy)]
    line_size: u16,
}

impl BoardGeometry {
    /// Pixel layout of the classic image board: 200px squares, 10px lines.
    pub const PIXELS: Self = Self::square(200, 10);

    /// Terminal layout. Each square draws its own border, so there are no
    /// separate dividing lines; terminal cells are about twice as tall as wide.
    pub const TERMINAL: Self = Self::new(12, 6, 0);

    /// Creates a geometry with distinct square width and height.
    pub const fn new(square_width: u16, square_height: u16, line_size: u16) -> Self {
        Self {
            square_width,
            square_height,
            line_size,
        }
    }

    /// Creates a geometry with square cells.
    pub const fn square(size: u16, line_size: u16) -> Self {
        Self::new(size, size, line_size)
    }

    /// Total width: three squares and two lines.
    pub fn board_width(&self) -> u16 {
        3 * self.square_width + 2 * self.line_size
    }

    /// Total height: three squares and two lines.
    pub fn board_height(&self) -> u16 {
        3 * self.square_height + 2 * self.line_size
    }

    /// Maps a point relative to the board's top-left corner to (row, col).
    ///
    /// Each axis is divided by the square size plus half a line, so a click on
    /// a dividing line lands in a neighbouring square. The result may exceed 2
    /// for points past the board edge; the engine rejects those.
    #[instrument(skip(self))]
    pub fn cell_at(&self, x: u16, y: u16) -> (usize, usize) {
        let half_line = self.line_size / 2;
        let row = usize::from(y / (self.square_height + half_line).max(1));
        let col = usize::from(x / (self.square_width + half_line).max(1));
        trace!(row, col, "Translated click");
        (row, col)
    }

    /// Top-left corner of the square at (row, col), relative to the board.
    pub fn cell_origin(&self, row: u16, col: u16) -> (u16, u16) {
        (
            col * (self.square_width + self.line_size),
            row * (self.square_height + self.line_size),
        )
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::TERMINAL
    }
}
