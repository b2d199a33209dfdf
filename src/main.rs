use clap::Parser;
use deploy_init::{
    cli::{Cli, Commands},
    config,
};
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> deploy_init::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Local config lives next to the project being scanned
    let project_path = match &cli.command {
        Commands::Detect { path } | Commands::Init { path, .. } => Some(path.as_path()),
        Commands::Images { .. } => Some(Path::new(".")),
    };
    let config = config::load_config(cli.config.as_deref(), project_path)?;
    log::debug!("Using configuration: {:?}", config);

    deploy_init::run_command(cli.command, cli.json, &config)
}
