//! Elidune Shelf - single-user library catalogue
//!
//! Loads the title file, then runs the interactive menu on stdin/stdout.
//! Logs go to stderr (or a file) so they never mix with the menu.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use elidune_shelf::{
    cli::Session,
    config::{AppConfig, Overrides},
    repository::TitleStore,
    services::Catalogue,
};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "elidune-shelf", version, about = "Single-user library catalogue")]
struct Args {
    /// Title file, one book per line
    #[arg(long, value_name = "PATH")]
    books: Option<PathBuf>,

    /// Library name shown in the menu
    #[arg(long)]
    name: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            books_path: self.books.clone(),
            library_name: self.name.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::load(&args.overrides()).context("Failed to load configuration")?;

    let _log_guard = init_tracing(&config)?;

    tracing::info!("Starting Elidune Shelf v{}", env!("CARGO_PKG_VERSION"));

    let store = TitleStore::new(&config.library.books_path);
    let (mut catalogue, load_error) = Catalogue::load(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Some(e) = load_error {
        writeln!(stdout.lock(), "{}", e)?;
    }

    Session::new(&mut catalogue, stdin.lock(), stdout.lock(), config.library.name.as_str())
        .run()
        .context("Terminal I/O failed")?;

    tracing::info!("Session ended with {} books", catalogue.len());
    Ok(())
}

/// Install the global subscriber; the guard must live until exit when
/// logging to a file.
fn init_tracing(config: &AppConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("elidune_shelf={}", config.logging.level).into());

    let (writer, guard) = match &config.logging.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .context("logging.file must name a file")?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(io::stderr), None),
    };

    let fmt_layer: Box<dyn Layer<Registry> + Send + Sync> = if config.json_logs() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_ansi(config.logging.file.is_none())
            .with_writer(writer)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    Ok(guard)
}
