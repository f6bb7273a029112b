//! rowkind CLI: the `rowkind` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Kinds { json } => commands::kinds::run(json),

        Commands::Resolve { sql_type, json } => commands::resolve::run(sql_type, json),

        Commands::Describe { kind, json } => commands::describe::run(kind, json),

        Commands::Convert {
            kind,
            value,
            shape,
            json,
        } => commands::convert::run(commands::convert::Args {
            kind,
            value,
            shape,
            json,
        }),
    }
}
