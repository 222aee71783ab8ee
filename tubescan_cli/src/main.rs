use clap::Parser;
use owo_colors::OwoColorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging; -v/-vv raise the default level, RUST_LOG wins.
    let default_filter = match cli.verbose {
        0 => "tubescan_cli=info,tubescan_core=info",
        1 => "tubescan_cli=debug,tubescan_core=debug",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match &cli.command {
        Commands::Search {
            queries,
            video_type,
            order,
            after,
            before,
            max,
        } => {
            commands::search::run(&cli, queries, *video_type, *order, *after, *before, *max).await
        }
        Commands::Channel { url, order, max } => {
            commands::channel::run(&cli, url, *order, *max).await
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
