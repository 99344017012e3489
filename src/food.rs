use rand::Rng;

use crate::grid::{GRID_H, GRID_W, Position};

/// The single apple on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut food = Food::at(Position::new(0, 0));
        food.randomize(rng);
        food
    }

    pub fn at(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the food to a uniformly random cell. The snake is not
    /// consulted here.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position = Position {
            x: rng.gen_range(0..GRID_W),
            y: rng.gen_range(0..GRID_H),
        };
    }
}
