//! tracelens CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "tracelens")]
#[command(version)]
#[command(about = "Analyze JavaScript stack traces", long_about = None)]
struct Cli {
    /// TOML file with rendering options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a readable report of the application frames
    Report {
        /// Trace file (stdin when omitted or '-')
        input: Option<PathBuf>,

        /// Keep dependency, bundler and native frames
        #[arg(long)]
        include_internal: bool,

        /// Maximum number of frames to show
        #[arg(long)]
        max_frames: Option<usize>,

        /// Error message (defaults to the trace's header line)
        #[arg(long)]
        message: Option<String>,
    },

    /// Print the application frames on one line
    Minify {
        /// Trace file (stdin when omitted or '-')
        input: Option<PathBuf>,

        /// Maximum number of frames to join
        #[arg(long)]
        max_frames: Option<usize>,
    },

    /// Print where the error originated
    Locate {
        /// Trace file (stdin when omitted or '-')
        input: Option<PathBuf>,
    },

    /// Print the parsed trace as JSON
    Parse {
        /// Trace file (stdin when omitted or '-')
        input: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print component names from a UI framework owner stack
    Components {
        /// Owner stack file (stdin when omitted or '-')
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracelens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Report {
            input,
            include_internal,
            max_frames,
            message,
        } => {
            let text = commands::read_input(input.as_deref())?;
            commands::report::execute(
                &text,
                commands::report::ReportArgs {
                    include_internal,
                    max_frames,
                    message,
                },
                &config,
            )
        }
        Commands::Minify { input, max_frames } => {
            let text = commands::read_input(input.as_deref())?;
            commands::minify::execute(&text, max_frames, &config)
        }
        Commands::Locate { input } => {
            let text = commands::read_input(input.as_deref())?;
            commands::locate::execute(&text)
        }
        Commands::Parse { input, pretty } => {
            let text = commands::read_input(input.as_deref())?;
            commands::parse::execute(&text, pretty)?
        }
        Commands::Components { input } => {
            let text = commands::read_input(input.as_deref())?;
            commands::components::execute(&text)
        }
    };

    println!("{}", output);
    Ok(())
}
