use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::food::Food;
use crate::grid::{self, Position, TERMINAL_METRICS};
use crate::snake::Snake;

const FIELD_COLOR: Color = Color::Rgb { r: 175, g: 215, b: 70 };
const GRASS_COLOR: Color = Color::Rgb { r: 167, g: 209, b: 61 };
const FOOD_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 155, b: 0 };
const SCORE_COLOR: Color = Color::Rgb { r: 255, g: 255, b: 255 };

/// Board origin in terminal cells, inside the border.
const ORIGIN: (u16, u16) = (1, 1);

/// What is visible in a cell. Later layers cover earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Field,
    Grass,
    Food,
    Snake,
}

impl CellKind {
    fn color(self) -> Color {
        match self {
            CellKind::Field => FIELD_COLOR,
            CellKind::Grass => GRASS_COLOR,
            CellKind::Food => FOOD_COLOR,
            CellKind::Snake => SNAKE_COLOR,
        }
    }
}

pub fn cell_kind(snake: &Snake, food: &Food, position: Position) -> CellKind {
    if snake.contains(position) {
        CellKind::Snake
    } else if food.position() == position {
        CellKind::Food
    } else if grid::is_grass_cell(position) {
        CellKind::Grass
    } else {
        CellKind::Field
    }
}

/// Columns and rows needed for the border, the board and the two text
/// lines under it.
pub const fn required_terminal_size() -> (u16, u16) {
    let (cols, rows) = TERMINAL_METRICS.board_size();
    (ORIGIN.0 + cols as u16 + 1, ORIGIN.1 + rows as u16 + 3)
}

pub fn fits_terminal(cols: u16, rows: u16) -> bool {
    let (need_cols, need_rows) = required_terminal_size();
    cols >= need_cols && rows >= need_rows
}

/// Terminal column and row of the top-left corner of a board cell.
fn screen_origin(position: Position) -> (u16, u16) {
    let rect = grid::cell_bounds(position, TERMINAL_METRICS);
    (ORIGIN.0 + rect.x as u16, ORIGIN.1 + rect.y as u16)
}

pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Draws one frame: border, board, score line.
    pub fn draw(&mut self, snake: &Snake, food: &Food, score: u32) -> std::io::Result<()> {
        self.draw_border()?;

        let cell_text = " ".repeat(TERMINAL_METRICS.width as usize);
        for position in grid::all_cells() {
            if position.x == 0 {
                let (col, row) = screen_origin(position);
                queue!(self.out, MoveTo(col, row))?;
            }
            let kind = cell_kind(snake, food, position);
            queue!(self.out, SetBackgroundColor(kind.color()), Print(&cell_text))?;
        }
        queue!(self.out, ResetColor)?;

        let (_, board_rows) = TERMINAL_METRICS.board_size();
        queue!(
            self.out,
            MoveTo(0, ORIGIN.1 + board_rows as u16 + 1),
            SetForegroundColor(SCORE_COLOR),
            Print(format!("Score: {score}    ")),
            ResetColor,
            MoveTo(0, ORIGIN.1 + board_rows as u16 + 2),
            Print("Use arrow keys to move, 'q' to quit"),
        )?;

        self.out.flush()
    }

    /// Wipes the screen, e.g. after the terminal was resized.
    pub fn clear(&mut self) -> std::io::Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All))?;
        self.out.flush()
    }

    fn draw_border(&mut self) -> std::io::Result<()> {
        let (cols, rows) = TERMINAL_METRICS.board_size();
        let (cols, rows) = (cols as u16, rows as u16);
        let horizontal = "#".repeat(cols as usize + 2);

        queue!(self.out, MoveTo(0, 0), Print(&horizontal))?;
        for row in ORIGIN.1..ORIGIN.1 + rows {
            queue!(
                self.out,
                MoveTo(0, row),
                Print("#"),
                MoveTo(ORIGIN.0 + cols, row),
                Print("#")
            )?;
        }
        queue!(self.out, MoveTo(0, ORIGIN.1 + rows), Print(&horizontal))?;
        Ok(())
    }
}
