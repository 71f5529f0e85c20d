mod cli;
mod config;
mod handlers;
mod locale;
mod logger;
mod reboot;
mod shell;
mod transcript;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use handlers::{batch, interactive};
use std::env;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };
    let config = config::load_config(&config_dir)?;
    let ctx = handlers::build_context(&cli, &config)?;

    if cli.commands.is_empty() {
        interactive::handle_interactive(ctx)
    } else {
        batch::handle_batch(ctx, &cli.commands)
    }
}
