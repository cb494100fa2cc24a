//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use msf_gamelogs::{
    cli::{Commands, Msf},
    commands::{
        config::handle_config,
        gamelogs::{handle_gamelogs, GamelogsParams},
    },
    Config, Service,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Msf::parse();

    let default_level = if app.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match app.command {
        Commands::Gamelogs {
            date,
            week,
            season,
            filters,
            json,
        } => {
            let service = Service::new(config)?;
            handle_gamelogs(
                &service,
                GamelogsParams {
                    date,
                    week,
                    season,
                    filters,
                    as_json: json,
                },
            )
            .await?
        }

        Commands::Config => handle_config(&config)?,
    }

    Ok(())
}
