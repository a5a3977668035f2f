//! `pov` - browse nightlife events from the terminal.

mod config;
mod dataset;
mod error;
mod export;
mod logging;
mod opener;

#[cfg(feature = "browse")]
mod browse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use praonde_core::{EventId, Filter};

use crate::config::{default_log_file, load_config, resolve_settings, Config};
use crate::dataset::load_seed;
use crate::error::AppError;
use crate::export::{export, ExportFormat};

#[derive(Parser)]
#[command(name = "pov")]
#[command(about = "Pra Onde Vamos? - swipe through nightlife events", long_about = None)]
struct Cli {
    /// Path to the config file (default: <config dir>/praonde/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[cfg(feature = "browse")]
    /// Open the interactive deck (default)
    Browse {
        /// Filter to start with: Todos, Festas, Bares, Shows or Cultural
        #[arg(short, long)]
        filter: Option<Filter>,

        /// Number of super likes for this session
        #[arg(long)]
        super_likes: Option<u32>,

        /// JSON file with the events to browse instead of the built-in ones
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Print the deck, in order, under a filter
    Deck {
        /// Todos, Festas, Bares, Shows or Cultural
        #[arg(short, long)]
        filter: Option<Filter>,

        /// Output format: json or yaml
        #[arg(long, default_value = "json")]
        format: ExportFormat,

        /// JSON file with the events to use instead of the built-in ones
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a single event
    Show {
        /// Event id
        id: EventId,

        /// Output format: json or yaml
        #[arg(long, default_value = "json")]
        format: ExportFormat,

        /// JSON file with the events to use instead of the built-in ones
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        #[cfg(feature = "browse")]
        Some(Command::Browse {
            filter,
            super_likes,
            seed,
        }) => browse(&config, filter, super_likes, seed)?,
        #[cfg(feature = "browse")]
        None => browse(&config, None, None, None)?,
        #[cfg(not(feature = "browse"))]
        None => anyhow::bail!("built without the browse feature; use `pov deck` or `pov show`"),
        Some(Command::Deck {
            filter,
            format,
            seed,
            output,
        }) => {
            logging::init_stderr()?;
            let settings = resolve_settings(&config, filter, None, seed)?;
            let seed = load_seed(settings.seed.as_deref())?;

            let events: Vec<_> = seed
                .events()
                .iter()
                .filter(|e| settings.filter.matches(e))
                .collect();
            tracing::debug!(filter = %settings.filter, count = events.len(), "exporting deck");
            let content = export(&events, format)?;

            match output {
                Some(path) => std::fs::write(path, content).map_err(AppError::from)?,
                None => print!("{}", content),
            }
        }
        Some(Command::Show { id, format, seed }) => {
            logging::init_stderr()?;
            let settings = resolve_settings(&config, None, None, seed)?;
            let seed = load_seed(settings.seed.as_deref())?;

            let event = seed.get(id).ok_or(AppError::EventNotFound(id))?;
            print!("{}", export(event, format)?);
        }
    }

    Ok(())
}

#[cfg(feature = "browse")]
fn browse(
    config: &Config,
    filter: Option<Filter>,
    super_likes: Option<u32>,
    seed: Option<PathBuf>,
) -> Result<(), AppError> {
    let log_file = config.log_file.clone().unwrap_or_else(default_log_file);
    logging::init_file(&log_file, config.log_level.as_deref())?;

    let settings = resolve_settings(config, filter, super_likes, seed)?;
    let seed = load_seed(settings.seed.as_deref())?;

    let session = praonde_core::Session::new(seed)
        .with_super_likes(settings.super_likes)
        .with_filter(settings.filter);

    browse::run(session)
}
