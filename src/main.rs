use clap::Parser;

mod cli;
mod commands;
mod config;
mod dataset;
mod domain;
mod logging;
mod services;

use cli::Cli;
use commands::{handle_explore_commands, handle_setup_commands, handle_view_commands};
use dataset::DatasetStore;
use services::output::print_error;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        print_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(source) = &cli.source {
        config.dataset.source = source.clone();
    }
    logging::init_logging(&config.logging);
    tracing::debug!(source = %config.dataset.source, offline = cli.offline, "starting");

    if handle_setup_commands(cli, &config)? {
        return Ok(());
    }

    let store = DatasetStore::load(&config.dataset, cli.offline)?;
    if handle_view_commands(cli, &config, &store)? {
        return Ok(());
    }
    if handle_explore_commands(cli, &config, store.get_dataset())? {
        return Ok(());
    }
    anyhow::bail!("unhandled command: {:?}", cli.command)
}
