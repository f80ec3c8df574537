//! # sutra CLI
//!
//! Command-line interface for the sutra story editor.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sutra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "sutra.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new sutra project
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Create a story with its seed block
    New {
        /// Story title (the id is its slug)
        title: String,
    },

    /// List story ids
    List,

    /// Print one story
    Show {
        /// Story id
        id: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Json)]
        format: ShowFormat,
    },

    /// Apply block operations to a story and save it
    Apply {
        /// Story id
        id: String,

        /// A block operation as JSON, or an array of them
        ops: String,
    },

    /// Render a story page to the output directory
    Export {
        /// Story id
        id: String,

        /// Output directory (defaults to the configured one)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Read or write UI preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// Print a preference value
    Get { key: String },

    /// Set a preference value (persists immediately)
    Set { key: String, value: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum ShowFormat {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::WARN.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_project(path.as_deref()),
        Commands::New { title } => commands::new_story(&cli.config, &title),
        Commands::List => commands::list_stories(&cli.config),
        Commands::Show { id, format } => {
            commands::show_story(&cli.config, &id, matches!(format, ShowFormat::Json))
        }
        Commands::Apply { id, ops } => commands::apply_ops(&cli.config, &id, &ops),
        Commands::Export { id, out } => commands::export_story(&cli.config, &id, out.as_deref()),
        Commands::Prefs { command } => match command {
            PrefsCommands::Get { key } => commands::prefs_get(&cli.config, &key),
            PrefsCommands::Set { key, value } => commands::prefs_set(&cli.config, &key, &value),
        },
    }
}
