use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use simplelog::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "snake_arcade", version, about = "Classic snake in the terminal")]
pub struct Config {
    /// Seed for food placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frames drawn per second. Gameplay speed does not depend on it
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Where log output goes (the terminal is taken by the game)
    #[arg(long, default_value = "snake_arcade.log")]
    pub log_file: PathBuf,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
