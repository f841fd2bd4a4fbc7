//! tutorvox CLI and HTTP server entry point.
//!
//! Binary name: `tvox`
//!
//! Parses CLI arguments, installs tracing, loads configuration, then
//! dispatches to the command handler or starts the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use tutorvox_infra::config::load_config;
use tutorvox_observe::tracing_setup::{
    OTEL_ENV_VAR, default_filter, init_tracing, otel_requested, shutdown_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or logging
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "tvox", &mut std::io::stdout());
        return Ok(());
    }

    let enable_otel = otel_requested(std::env::var(OTEL_ENV_VAR).ok().as_deref());
    init_tracing(default_filter(cli.verbose, cli.quiet), enable_otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Serve { port, host } => {
            cli::serve::serve(&config, &host, port, cli.quiet).await?;
        }

        Commands::ClearAudio => {
            cli::audio::clear_audio(&config, cli.json, cli.quiet).await?;
        }

        Commands::Ping { url } => {
            let base_url = url.unwrap_or_else(|| config.server.public_base_url.clone());
            cli::ping::ping(&base_url, cli.json, cli.quiet).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
