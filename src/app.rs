use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use log::{info, warn};

use crate::error::Result;
use crate::game::Game;
use crate::input::{self, Command};
use crate::render::{self, Renderer};

/// Raw mode plus alternate screen for as long as the value lives.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        match terminal::size() {
            Ok((cols, rows)) if !render::fits_terminal(cols, rows) => {
                let (need_cols, need_rows) = render::required_terminal_size();
                warn!("terminal is {cols}x{rows}, the board needs {need_cols}x{need_rows}; drawing will wrap");
            }
            Ok(_) => {}
            Err(e) => warn!("could not read terminal size: {e}"),
        }

        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        // From here on Drop restores the terminal.
        let session = Self { _private: () };
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            Hide,
            SetTitle("Snake Game"),
            Clear(ClearType::All)
        )
        .context("failed to prepare the terminal")?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), Show, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}

/// Everything one play session needs, owned in one place.
pub struct App<W: Write = Stdout> {
    game: Game,
    renderer: Renderer<W>,
    frame_interval: Duration,
    running: bool,
}

impl<W: Write> App<W> {
    pub fn new(game: Game, renderer: Renderer<W>, frame_interval: Duration) -> Self {
        Self {
            game,
            renderer,
            frame_interval,
            running: true,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => self.game.set_direction(direction),
            Command::Quit => {
                info!("quit requested, score {}", self.game.score());
                self.running = false;
            }
        }
    }

    /// One frame: drain pending terminal events, then tick and draw.
    pub fn frame(&mut self, now: Instant) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(command) = input::command_for(key) {
                        self.handle(command);
                    }
                }
                Event::Resize(..) => self.renderer.clear()?,
                _ => {}
            }
        }
        self.step(now)
    }

    /// Advances the game if a tick is due and draws the current state.
    pub fn step(&mut self, now: Instant) -> Result<()> {
        self.game.advance(now);
        self.renderer
            .draw(self.game.snake(), self.game.food(), self.game.score())
            .context("failed to draw frame")
    }

    /// Runs frames until a quit command arrives, sleeping out the rest of
    /// each frame interval.
    pub fn run(&mut self) -> Result<()> {
        while self.running {
            let started = Instant::now();
            self.frame(started)?;
            if let Some(rest) = self.frame_interval.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, Position};

    fn app() -> App<Vec<u8>> {
        App::new(Game::new(5), Renderer::new(Vec::new()), Duration::from_millis(16))
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app();
        assert!(app.is_running());
        app.handle(Command::Quit);
        assert!(!app.is_running());
    }

    #[test]
    fn turn_reaches_the_snake() {
        let mut app = app();
        app.handle(Command::Turn(Direction::Up));
        assert_eq!(app.game().snake().direction(), Direction::Up);
        app.handle(Command::Turn(Direction::Down));
        assert_eq!(app.game().snake().direction(), Direction::Up);
    }

    #[test]
    fn step_draws_every_frame_but_ticks_on_schedule() {
        let mut app = app();
        let start = Instant::now();

        app.step(start).unwrap();
        assert_eq!(app.game().snake().head(), Position::new(5, 10));
        let drawn_once = app.renderer.writer().len();
        assert!(drawn_once > 0);

        app.step(start + Duration::from_secs(1)).unwrap();
        assert_eq!(app.game().snake().head(), Position::new(6, 10));
        assert!(app.renderer.writer().len() > drawn_once);
    }
}
