//! `tvox serve` - run the HTTP server until Ctrl+C or SIGTERM.

use anyhow::Result;
use console::style;

use tutorvox_infra::config::AppConfig;
use tutorvox_types::config::AUDIO_MOUNT_PATH;

use crate::http::router::build_router;
use crate::state::AppState;

pub async fn serve(config: &AppConfig, host: &str, port: u16, quiet: bool) -> Result<()> {
    let state = AppState::init(config).await?;

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    if !quiet {
        println!();
        println!(
            "  {} tutorvox listening on {}",
            style("⚡").bold(),
            style(format!("http://{addr}")).cyan()
        );
        println!(
            "  {} audio served from {} at {}{}",
            style("♪").bold(),
            style(state.audio_dir.display()).yellow(),
            config.server.public_base_url.trim_end_matches('/'),
            AUDIO_MOUNT_PATH
        );
        println!("  {}", style("Press Ctrl+C to stop").dim());
    }

    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
///
/// A handler that cannot be installed never fires; the other one still can.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
