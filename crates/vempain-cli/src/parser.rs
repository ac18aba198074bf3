//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use vempain_site::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for the Vempain site resource listing.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "vempain")]
#[command(about = "List resources published by a Vempain admin backend")]
#[command(version)]
pub struct Cli {
    /// Base URL of the admin backend
    #[arg(
        long = "base-url",
        env = "VEMPAIN_BASE_URL",
        global = true,
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Bearer token for the admin API
    #[arg(long, env = "VEMPAIN_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
