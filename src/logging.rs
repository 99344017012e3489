use std::fs::File;
use std::path::Path;

use anyhow::Context;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::Result;

/// Sends `log` output to `path`; stdout belongs to the renderer.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("failed to install logger")?;
    Ok(())
}
