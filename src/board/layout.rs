//! Boustrophedon square numbering.
//!
//! Row 0 is the bottom row and runs left to right (`1..=side`). Row 1 runs
//! right to left, and so on alternately. On the classic board row 9 holds
//! squares 91 to 100.

use serde::{Deserialize, Serialize};

use super::Square;

/// Cell address on the grid. `row` counts up from the bottom, `col` from
/// the left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: u8,
    pub col: u8,
}

/// Coordinate mapping for a `side x side` board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    side: u8,
}

impl GridLayout {
    #[must_use]
    pub const fn new(side: u8) -> Self {
        Self { side }
    }

    #[must_use]
    pub const fn side(self) -> u8 {
        self.side
    }

    fn total(self) -> u16 {
        u16::from(self.side) * u16::from(self.side)
    }

    /// Grid cell holding `square`, or `None` off the board.
    #[must_use]
    pub fn coord_of(self, square: Square) -> Option<GridCoord> {
        if square == 0 || u16::from(square) > self.total() {
            return None;
        }
        let zero_based = square - 1;
        let row = zero_based / self.side;
        let mut col = zero_based % self.side;
        if row % 2 == 1 {
            col = self.side - 1 - col;
        }
        Some(GridCoord { row, col })
    }

    /// Square at a grid cell, or `None` off the grid.
    #[must_use]
    pub fn square_at(self, coord: GridCoord) -> Option<Square> {
        if coord.row >= self.side || coord.col >= self.side {
            return None;
        }
        let col = if coord.row % 2 == 1 {
            self.side - 1 - coord.col
        } else {
            coord.col
        };
        Some(coord.row * self.side + col + 1)
    }

    /// Squares in screen order: top row first, each row left to right.
    pub fn render_order(self) -> impl Iterator<Item = Square> {
        let side = self.side;
        (0..side).rev().flat_map(move |row| {
            (0..side).filter_map(move |col| self.square_at(GridCoord { row, col }))
        })
    }

    /// Centre of a square's cell on a `width x height` surface whose y axis
    /// grows downward. Used to anchor connection lines.
    #[must_use]
    pub fn cell_center(self, square: Square, width: f32, height: f32) -> Option<(f32, f32)> {
        let coord = self.coord_of(square)?;
        let cell_w = width / f32::from(self.side);
        let cell_h = height / f32::from(self.side);
        let x = f32::from(coord.col) * cell_w + cell_w / 2.0;
        let y = height - (f32::from(coord.row) * cell_h + cell_h / 2.0);
        Some((x, y))
    }
}
