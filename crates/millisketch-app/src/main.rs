//! Main application entry point.

use anyhow::Result;
use clap::Parser;
use millisketch_app::{App, AppConfig, Cli};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Starting MilliSketch");

    let cli = Cli::parse();
    let config = cli.config(AppConfig::default());
    let mut app = App::new(config);
    let output = app.execute(&cli.command)?;
    println!("{}", output.trim_end());
    Ok(())
}
