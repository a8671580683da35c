mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
#[cfg(test)]
mod test_support;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{ArgAction, Parser};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cmd::menu;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::terminal::TerminalPrompter;

#[derive(Parser)]
#[command(
    name = "gitmate",
    author,
    version,
    about = "Menu-driven helper for everyday Git tasks"
)]
struct Cli {
    /// Folder to work in (defaults to the current directory).
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    dir: Option<PathBuf>,
    /// Increase log output on stderr (-v info, -vv debug). RUST_LOG wins if set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match run().await {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
    };
    // A pending stdin read would otherwise hold the runtime open on shutdown.
    std::process::exit(code);
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let workspace_hint = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config = AppConfig::load(&workspace_hint)?;

    let context = AppContext::new(
        config,
        Arc::new(GitCli::new()),
        Arc::new(TerminalPrompter::new()),
    );

    tokio::select! {
        result = menu::run(&context) => result,
        () = interrupted() => {
            println!("\n{}", menu::INTERRUPTED_MESSAGE);
            Ok(())
        }
    }
}

async fn interrupted() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "unable to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => "error",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
