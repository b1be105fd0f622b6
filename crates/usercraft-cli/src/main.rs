//! Usercraft CLI.
//!
//! Runs the collection workshop and prints its results.
//!
//! # Quick Start
//!
//! ```bash
//! # Print every step of the walkthrough
//! usercraft run
//!
//! # Final users, most followers first, as JSON
//! usercraft users --order desc --format json
//!
//! # Show the resolved configuration
//! usercraft config --project-dir ./my-workshop
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use usercraft_config::ConfigLoader;

/// Usercraft - containers, iteration and sorting on a small user directory.
#[derive(Parser)]
#[command(name = "usercraft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory containing usercraft.toml (defaults to the current directory).
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Run the workshop and print every step.
    Run,

    /// Print the users left after the workshop.
    Users {
        /// Output format (defaults to output.format from the config).
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Order by number of followers.
        #[arg(short, long, value_enum, default_value = "asc")]
        order: OrderArg,
    },

    /// Print the resolved configuration as TOML.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Asc,
    Desc,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the workshop output
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if matches!(cli.command, Commands::Version) {
        commands::version::run();
        return Ok(());
    }

    let mut loader = ConfigLoader::new();
    if let Some(dir) = &cli.project_dir {
        loader = loader.with_project_dir(dir);
    }
    let config = loader.load()?;

    style::set_no_color(cli.no_color || !config.output.color);

    match cli.command {
        Commands::Version => Ok(()),
        Commands::Run => commands::run::run(&config),
        Commands::Users { format, order } => {
            let format = match format {
                Some(FormatArg::Table) => usercraft_config::OutputFormat::Table,
                Some(FormatArg::Json) => usercraft_config::OutputFormat::Json,
                None => config.output.format,
            };
            let order = match order {
                OrderArg::Asc => usercraft::SortOrder::Ascending,
                OrderArg::Desc => usercraft::SortOrder::Descending,
            };
            commands::users::run(&config, format, order)
        }
        Commands::Config => commands::config::show(&config),
    }
}
