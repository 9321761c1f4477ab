use anyhow::{Context, Result};
use clap::Parser;

use quizcards::cli::Cli;
use quizcards::config::Config;
use quizcards::logging::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path(),
    };
    let mut config = Config::load_from(&path).context("failed to load configuration")?;
    cli.apply(&mut config);

    init_tracing(&config.logging, cli.log_level.as_deref())
        .context("failed to initialize logging")?;
    tracing::info!(
        config = %path.display(),
        locale = ?config.locale,
        "starting quizcards"
    );

    quizcards::ui::runtime::run(&config)?;
    Ok(())
}
