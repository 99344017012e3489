use std::io::stdout;

use clap::Parser;
use log::info;

use snake_arcade::app::{App, TerminalSession};
use snake_arcade::config::Config;
use snake_arcade::error::Result;
use snake_arcade::render::Renderer;
use snake_arcade::grid::{CELL_SIZE, GRID_H, GRID_W, PIXEL_METRICS};
use snake_arcade::{logging, Game};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(&config.log_file, config.log_level)?;

    let seed = config.seed_or_random();
    info!("starting snake_arcade, seed {seed}, {} fps", config.fps);

    let game = Game::new(seed);
    let (width_px, height_px) = PIXEL_METRICS.board_size();
    info!(
        "board {GRID_W}x{GRID_H} cells ({width_px}x{height_px} px at {CELL_SIZE} px), tick every {:?}",
        game.tick_interval()
    );

    let mut app = App::new(game, Renderer::new(stdout()), config.frame_interval());
    {
        let _terminal = TerminalSession::enter()?;
        app.run()?;
    }

    let score = app.game().score();
    info!("exiting with score {score}");
    println!("Game Over! Final score: {score}");
    Ok(())
}
