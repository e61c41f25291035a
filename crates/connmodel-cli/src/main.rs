//! connmodel CLI - ConnId builder generator
//!
//! Commands:
//! - `connmodel generate` - Write builder sources for every marked class
//! - `connmodel check` - Validate marked classes without writing anything
//! - `connmodel inspect` - Print the derived class metadata as JSON

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod generate;
mod settings;
mod source;

#[derive(Parser)]
#[command(name = "connmodel")]
#[command(author, version, about = "Generate ConnId connector object builders", long_about = None)]
struct Cli {
    /// Path to connmodel.toml (default: ./connmodel.toml, optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate builder classes for every marked class
    Generate {
        /// Class descriptor documents (.toml or .json)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output root for generated sources (overrides output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate marked classes without generating code
    Check {
        /// Class descriptor documents (.toml or .json)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,
    },

    /// Print derived class metadata as JSON
    Inspect {
        /// Class descriptor documents (.toml or .json)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Only show this class (simple or fully qualified name)
        #[arg(long)]
        class: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = settings::Settings::load(cli.config.as_deref(), cli.log_level.as_deref())?;
    connmodel_logging::init_logging(settings.level);

    match cli.command {
        Commands::Generate { input, output } => {
            generate::run(&settings, &input, output)?;
        }
        Commands::Check { input } => {
            check::run(&settings, &input)?;
        }
        Commands::Inspect { input, class } => {
            check::inspect(&settings, &input, class.as_deref())?;
        }
    }

    Ok(())
}
