use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glide_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "glide")]
#[command(author, version, about = "Smooth scrolling page behaviors in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/glide/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Page layout file (defaults to the bundled demo page)
    #[arg(short, long, global = true)]
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the page in the terminal
    Run,
    /// Animate a scroll and print every frame
    Scroll {
        /// Anchor selector (e.g. "#contact") or a page offset
        target: String,
        /// Animation duration in milliseconds
        #[arg(short, long)]
        duration: Option<u64>,
        /// Starting offset
        #[arg(short, long, default_value_t = 0.0)]
        from: f64,
    },
    /// Show which nav link is active at a scroll position
    Highlight {
        /// Scroll position
        position: f64,
    },
    /// Print samples of the cubic ease-in-out curve
    Ease {
        /// Duration in milliseconds
        #[arg(short, long, default_value_t = 800.0)]
        duration: f64,
        /// Distance covered
        #[arg(long, default_value_t = 800.0)]
        distance: f64,
        /// Number of samples, including both ends
        #[arg(short, long, default_value_t = 9)]
        samples: usize,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the configuration file path
    Config {
        /// Write the default configuration to that path
        #[arg(long)]
        write: bool,
    },
}

/// Install the subscriber; the terminal host logs to a file instead of stderr
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    let (file_layer, stderr_layer) = if to_file {
        let data_dir = config.data_dir();
        std::fs::create_dir_all(&data_dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file));
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = Arc::new(AppConfig::load_from(&config_path)?);

    let is_tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, is_tui)?;

    let page_path = cli.page.as_deref();

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, page_path).await,
        Some(Commands::Scroll {
            target,
            duration,
            from,
        }) => commands::scroll::run(&config, page_path, &target, duration, from).await,
        Some(Commands::Highlight { position }) => {
            commands::highlight::run(&config, page_path, position)
        }
        Some(Commands::Ease {
            duration,
            distance,
            samples,
            json,
        }) => commands::ease::run(duration, distance, samples, json),
        Some(Commands::Config { write }) => commands::config::run(&config_path, write),
    }
}
