//! Lingua CLI - page localization resolver.
//!
//! Provides commands for:
//! - `base`: Show the base page of a page
//! - `translate`: Show the variant of a page for a locale
//! - `render`: Replace insert tags in a text file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BaseArgs, RenderArgs, TranslateArgs};
use output::Output;

/// Lingua - page localization resolver.
#[derive(Parser)]
#[command(name = "lingua", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the base page of a page.
    Base(BaseArgs),
    /// Show the variant of a page for a locale.
    Translate(TranslateArgs),
    /// Replace insert tags in a text file.
    Render(RenderArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Base(args) => args.common.verbose,
            Self::Translate(args) => args.common.verbose,
            Self::Render(args) => args.common.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG (ERROR when unset)
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Base(args) => args.execute(),
        Commands::Translate(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
