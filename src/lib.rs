//! Classic grid snake: one snake, one apple, a fixed 150 ms gameplay tick.
//!
//! The engine (`grid`, `snake`, `food`, `game`) knows nothing about the
//! terminal. `input`, `render` and `app` put it on screen with crossterm.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod render;
pub mod snake;

pub use food::Food;
pub use game::{Game, TickOutcome, TickTimer, TICK_INTERVAL};
pub use grid::{Direction, Position, GRID_H, GRID_W};
pub use snake::{Collision, Snake};
