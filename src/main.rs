use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::logging;
use grid_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid snake game in the terminal")]
struct Cli {
    /// Seed for apple placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Append logs to this file; the terminal is taken by the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.log_file.as_deref())?;
    logging::install_panic_hook();

    let mut human_mode = HumanMode::new(GameConfig::default(), cli.seed);
    human_mode.run().await?;

    Ok(())
}
