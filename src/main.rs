use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_n::config::AppConfig;
use connect_n::driver::GameDriver;

/// Play connect-N against another person on the console.
#[derive(Parser)]
#[command(name = "connect-n", about = "Two-player Connect Four with a configurable board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override the number of pieces in a row needed to win
    #[arg(long)]
    run_length: Option<usize>,

    /// Colour the pieces
    #[arg(long)]
    color: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(run_length) = cli.run_length {
        config.board.run_length = run_length;
    }
    if cli.color {
        config.display.color = true;
    }
    config.validate().context("invalid board configuration")?;

    info!(
        rows = config.board.rows,
        columns = config.board.columns,
        run_length = config.board.run_length,
        "starting game"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = GameDriver::from_config(&config, stdin.lock(), stdout.lock())?;
    let outcome = driver.run().context("game aborted")?;
    info!(%outcome, "game over");
    Ok(())
}
