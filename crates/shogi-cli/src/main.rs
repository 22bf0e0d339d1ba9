//! Terminal shogi client.
//!
//! Reads commands from stdin and prints the board to stdout. Diagnostics go
//! to stderr through `tracing`.

mod command;
mod config;
mod render;
mod session;

use clap::Parser;
use config::ShogiConfig;
use render::Style;
use session::Session;
use shogi_engine::Game;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "shogi")]
#[command(about = "Play shogi in the terminal")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = ShogiConfig::default_path())]
    config: PathBuf,

    /// Draw pieces as letters instead of kanji
    #[arg(long)]
    ascii: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ShogiConfig::load(&cli.config)?;

    let level = match cli.log_level {
        Some(level) => level,
        None => config.log_level.parse()?,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Config: {:?}", cli.config);
    tracing::debug!(?config, "loaded configuration");

    let style = if cli.ascii {
        Style::Ascii
    } else {
        config.display.style
    };
    let game = Game::new(config.game.into());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(game, style, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}
