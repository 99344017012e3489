//! Board geometry: cell coordinates, directions and the mapping from cells
//! to the bounds they cover on a drawing surface.

use std::ops::Add;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const CELL_SIZE: u32 = 20;

/// Board width in cells.
pub const GRID_W: i32 = (WINDOW_WIDTH / CELL_SIZE) as i32;
/// Board height in cells.
pub const GRID_H: i32 = (WINDOW_HEIGHT / CELL_SIZE) as i32;

/// One cell of the 800x600 window.
pub const PIXEL_METRICS: CellMetrics = CellMetrics {
    width: CELL_SIZE,
    height: CELL_SIZE,
};

/// One cell in a terminal: two columns so cells come out roughly square.
pub const TERMINAL_METRICS: CellMetrics = CellMetrics {
    width: 2,
    height: 1,
};

/// A cell on the board. Signed so a head that just left the board is
/// still representable until the collision check sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector with y growing downwards, as on screen.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Size of a single cell on some surface, in that surface's units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u32,
    pub height: u32,
}

impl CellMetrics {
    /// Size of the whole board on this surface.
    pub const fn board_size(self) -> (u32, u32) {
        (self.width * GRID_W as u32, self.height * GRID_H as u32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

pub fn in_bounds(position: Position) -> bool {
    (0..GRID_W).contains(&position.x) && (0..GRID_H).contains(&position.y)
}

/// Area covered by `position` on a surface with the given cell size.
/// Only meaningful for cells on the board.
pub fn cell_bounds(position: Position, metrics: CellMetrics) -> Rect {
    debug_assert!(in_bounds(position), "cell {position:?} is off the board");
    Rect {
        x: position.x as u32 * metrics.width,
        y: position.y as u32 * metrics.height,
        width: metrics.width,
        height: metrics.height,
    }
}

/// Checkerboard of darker grass drawn over the field background.
pub fn is_grass_cell(position: Position) -> bool {
    (position.x + position.y) % 2 == 0
}

/// Every cell of the board, row by row.
pub fn all_cells() -> impl Iterator<Item = Position> {
    (0..GRID_H).flat_map(|y| (0..GRID_W).map(move |x| Position { x, y }))
}
