//! CLI entry point - the composition root.
//!
//! Wires the reqwest-backed site client to the command handlers and maps
//! failures to exit codes.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vempain_cli::handlers::resources::ResourcesArgs;
use vempain_cli::{Cli, CliError, Commands, handlers};
use vempain_core::CancellationToken;
use vempain_site::{DefaultSiteClient, SiteClientConfig};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();
}

/// Cancel `token` on the first Ctrl-C.
fn cancel_on_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            token.cancel();
        }
    });
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Query { filter, strict } => {
            handlers::query::execute(&filter, strict)?;
        }
        Commands::Resources {
            filter,
            strict,
            json,
            timeout,
        } => {
            let config = SiteClientConfig::new()
                .with_base_url(cli.base_url)
                .with_optional_token(cli.token);
            let client = DefaultSiteClient::new(&config).map_err(CliError::from)?;

            let cancel = CancellationToken::new();
            cancel_on_interrupt(cancel.clone());

            let args = ResourcesArgs {
                filter,
                strict,
                json,
                timeout,
            };
            handlers::resources::execute(&client, &args, cancel).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
