use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use murmur_tui::RunOptions;
use murmur_util::config::default_config_path;
use murmur_util::path_processing::config_file_path;
use murmur_util::{ClientConfig, InMemoryRecentSearchStore, JsonRecentSearchStore, Localizer, MessageCatalog, RecentSearchStore, expand_tilde};
use tracing::{info, warn};

const LOG_PATH_ENV: &str = "MURMUR_LOG_PATH";
const LOG_FILE_NAME: &str = "murmur.log";

/// Terminal search bar with search hints.
#[derive(Debug, Parser)]
#[command(name = "murmur", version)]
struct Cli {
    /// Client configuration file (defaults to MURMUR_CONFIG_PATH or the config directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Message catalog with localized strings.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
    /// Recent-search file (defaults to MURMUR_RECENT_SEARCHES_PATH or the config directory).
    #[arg(long, value_name = "PATH")]
    recent_searches: Option<PathBuf>,
    /// Hide the "Files" search type regardless of configuration.
    #[arg(long)]
    no_file_search: bool,
    /// Skip the "What are you searching for?" step.
    #[arg(long)]
    no_type_selector: bool,
    /// Theme name; MURMUR_THEME takes precedence.
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
    /// Where to write logs; the terminal belongs to the UI.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = load_config(&cli)?;
    let localizer = load_localizer(cli.catalog.as_deref(), &config)?;
    let recent_searches = open_recent_searches(cli.recent_searches.clone(), config.max_recent_searches);
    info!(
        file_search = config.enable_file_attachments,
        locale = localizer.locale(),
        "Starting murmur"
    );

    murmur_tui::run(RunOptions {
        config,
        localizer,
        recent_searches,
        type_selection_enabled: !cli.no_type_selector,
    })
    .await
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let path = match log_file {
        Some(path) => expand_tilde(&path.to_string_lossy()),
        None => config_file_path(LOG_PATH_ENV, LOG_FILE_NAME),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let path = expand_tilde(&path.to_string_lossy());
            ClientConfig::load(&path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => ClientConfig::load_default()
            .with_context(|| format!("loading config {}", default_config_path().display()))?,
    };
    if cli.no_file_search {
        config.enable_file_attachments = false;
    }
    if let Some(theme) = cli.theme.as_ref() {
        config.preferred_theme = Some(theme.clone());
    }
    Ok(config)
}

fn load_localizer(catalog: Option<&Path>, config: &ClientConfig) -> Result<Arc<dyn Localizer>> {
    let Some(path) = catalog.or(config.message_catalog.as_deref()) else {
        return Ok(Arc::new(MessageCatalog::builtin()));
    };
    let path = expand_tilde(&path.to_string_lossy());
    let catalog = MessageCatalog::load(&path).with_context(|| format!("loading message catalog {}", path.display()))?;
    Ok(Arc::new(catalog))
}

fn open_recent_searches(path: Option<PathBuf>, max_entries: usize) -> Arc<dyn RecentSearchStore> {
    match JsonRecentSearchStore::new(path, max_entries) {
        Ok(store) => {
            info!(path = %store.path().display(), "Recent searches loaded");
            Arc::new(store)
        }
        Err(error) => {
            warn!("Recent searches unavailable ({}); keeping them in memory", error);
            Arc::new(InMemoryRecentSearchStore::new(max_entries))
        }
    }
}
