//! dadjoke-tui - Browse dad jokes in the terminal, one page at a time.
//!
//! # Usage
//!
//! ```bash
//! dadjoke-tui
//! dadjoke-tui --search chicken
//! dadjoke-tui -s cat -l 10
//! ```

use std::fs::File;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dadjoke_tui::app::App;
use dadjoke_tui::client::{DEFAULT_BASE_URL, HttpJokeClient};
use dadjoke_tui::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use dadjoke_tui::paging::{DEFAULT_PAGE_SIZE, SearchQuery};
use dadjoke_tui::ui::style::Theme;

/// A terminal UI for dad jokes
#[derive(Parser, Debug)]
#[command(name = "dadjoke-tui", version, about, long_about = None)]
struct Cli {
    /// Search term for dad jokes (empty shows all jokes)
    #[arg(short, long)]
    search: Option<String>,

    /// Number of dad jokes to show per page [default: 5]
    #[arg(short, long)]
    limit: Option<NonZeroU32>,

    /// Base URL of the joke search API
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Write diagnostic logs to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    no_color: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            search: self.search.clone(),
            limit: self.limit,
            api_url: self.api_url.clone(),
            log_file: self.log_file.clone(),
            no_color: self.no_color,
        }
    }
}

// The UI owns the terminal, so logs only go to stderr when RUST_LOG asks
// for them explicitly.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.config_flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let (file_flags, config_warnings) = if cli.clear {
        (ConfigFlags::default(), Vec::new())
    } else {
        let (global_flags, mut warnings) = load_config_flags(&global_path)?;
        let (local_flags, local_warnings) = load_config_flags(&local_path)?;
        warnings.extend(local_warnings);
        (global_flags.union(&local_flags), warnings)
    };
    let effective = file_flags.union(&cli_flags);

    // Printed before the terminal is taken over, and logged once a
    // subscriber exists.
    for warning in &config_warnings {
        eprintln!("[warn] {warning}");
    }
    init_logging(effective.log_file.as_deref())?;
    for warning in &config_warnings {
        tracing::warn!("{warning}");
    }

    let query = SearchQuery::new(
        effective.search.unwrap_or_default(),
        effective.limit.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    let api_url = effective.api_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
    tracing::info!(term = %query.term, page_size = query.page_size.get(), api_url, "starting");

    let client = HttpJokeClient::new(api_url).context("Failed to create HTTP client")?;
    let no_color = effective.no_color || std::env::var_os("NO_COLOR").is_some();
    let theme = if no_color {
        Theme::plain()
    } else {
        Theme::default()
    };

    App::new(client, query).with_theme(theme).run()
}
