//! CLI command definitions for the `tvox` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod audio;
pub mod ping;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Voice English-practice tutor backend.
#[derive(Parser)]
#[command(name = "tvox", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./tutorvox.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Delete every generated audio file from the audio directory.
    #[command(name = "clear-audio")]
    ClearAudio,

    /// Check whether a running server answers the liveness probe.
    Ping {
        /// Server base URL (defaults to the configured public base URL).
        #[arg(long)]
        url: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
