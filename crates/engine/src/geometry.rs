//! Board geometry and the mapping between pixel space and squares.
//!
//! A `Board` never holds pieces. It only knows how many squares there are and
//! how large one square is, which is all that is needed to translate a cursor
//! or piece position into a `Square` and back.

use std::fmt;

use crate::config::Config;
use crate::constants::{BOARD_COLUMNS, BOARD_ROWS};
use crate::error::{ConfigError, Result};

/// A continuous point in pixel space, origin at the top-left of the board.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A discrete board cell. Values outside the board are representable so that
/// move generation can step off the edge and let the filter discard them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub col: i32,
    pub row: i32,
}

impl Square {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub const fn offset(self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    columns: i32,
    rows: i32,
    square_width: f32,
    square_height: f32,
}

impl Board {
    /// Builds the geometry for a `window` of pixels split into a `grid` of
    /// squares. The square size is truncated to whole pixels.
    pub fn new(window: (i32, i32), grid: (i32, i32)) -> Result<Self> {
        let (width, height) = window;
        let (columns, rows) = grid;
        if columns != BOARD_COLUMNS || rows != BOARD_ROWS {
            return Err(ConfigError::UnsupportedGrid { columns, rows });
        }
        if width < columns || height < rows {
            return Err(ConfigError::WindowTooSmall {
                width,
                height,
                columns,
                rows,
            });
        }
        Ok(Self {
            columns,
            rows,
            square_width: (width / columns) as f32,
            square_height: (height / rows) as f32,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(
            (config.window_width, config.window_height),
            (config.columns, config.rows),
        )
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Pixel size of one square as `(width, height)`.
    pub fn square_size(&self) -> (f32, f32) {
        (self.square_width, self.square_height)
    }

    pub fn contains(&self, square: Square) -> bool {
        (0..self.columns).contains(&square.col) && (0..self.rows).contains(&square.row)
    }

    /// The furthest a sliding piece can travel along one line.
    pub fn reach(&self) -> i32 {
        self.columns.max(self.rows) - 1
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| Square::new(col, row)))
    }

    pub fn square_center(&self, square: Square) -> Position {
        let corner = position_of(square, self);
        Position::new(
            corner.x + self.square_width / 2.0,
            corner.y + self.square_height / 2.0,
        )
    }
}

/// Maps a pixel position to the square containing it. Each axis is divided
/// by the square size and truncated toward zero; no clamping is applied.
pub fn square_of(position: Position, board: &Board) -> Square {
    Square::new(
        (position.x / board.square_width) as i32,
        (position.y / board.square_height) as i32,
    )
}

/// The top-left pixel corner of `square`.
pub fn position_of(square: Square, board: &Board) -> Position {
    Position::new(
        square.col as f32 * board.square_width,
        square.row as f32 * board.square_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new((600, 600), (8, 8)).unwrap()
    }

    #[test]
    fn test_square_size_is_truncated() {
        assert_eq!(board().square_size(), (75.0, 75.0));
        let odd = Board::new((610, 605), (8, 8)).unwrap();
        assert_eq!(odd.square_size(), (76.0, 75.0));
    }

    #[test]
    fn test_round_trip_every_square() {
        let board = board();
        for square in board.squares() {
            assert_eq!(square_of(position_of(square, &board), &board), square);
        }
        assert_eq!(board.squares().count(), 64);
    }

    #[test]
    fn test_square_of_truncates() {
        let board = board();
        assert_eq!(square_of(Position::new(74.9, 0.0), &board), Square::new(0, 0));
        assert_eq!(square_of(Position::new(75.0, 599.0), &board), Square::new(1, 7));
        // Off-board positions are mapped, not clamped.
        assert_eq!(square_of(Position::new(640.0, 10.0), &board), Square::new(8, 0));
        assert_eq!(square_of(Position::new(-80.0, 10.0), &board), Square::new(-1, 0));
    }

    #[test]
    fn test_non_square_cells() {
        let board = Board::new((48, 24), (8, 8)).unwrap();
        assert_eq!(board.square_size(), (6.0, 3.0));
        assert_eq!(position_of(Square::new(2, 5), &board), Position::new(12.0, 15.0));
        assert_eq!(square_of(Position::new(13.0, 17.0), &board), Square::new(2, 5));
        assert_eq!(board.square_center(Square::new(0, 0)), Position::new(3.0, 1.5));
    }

    #[test]
    fn test_contains() {
        let board = board();
        assert!(board.contains(Square::new(0, 0)));
        assert!(board.contains(Square::new(7, 7)));
        assert!(!board.contains(Square::new(8, 0)));
        assert!(!board.contains(Square::new(0, -1)));
    }

    #[test]
    fn test_rejects_degenerate_geometry() {
        assert!(Board::new((600, 600), (0, 8)).is_err());
        assert!(Board::new((4, 600), (8, 8)).is_err());
    }

    #[test]
    fn test_rejects_grids_other_than_eight_by_eight() {
        assert_eq!(
            Board::new((600, 600), (6, 6)),
            Err(ConfigError::UnsupportedGrid { columns: 6, rows: 6 })
        );
        assert_eq!(
            Board::new((1600, 1600), (16, 16)),
            Err(ConfigError::UnsupportedGrid { columns: 16, rows: 16 })
        );
    }
}
