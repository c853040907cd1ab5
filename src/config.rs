//! Configuration management for Elidune Shelf

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct LibraryConfig {
    pub name: String,
    pub books_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line, applied last
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub books_path: Option<PathBuf>,
    pub library_name: Option<String>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Load configuration from defaults, files, environment and overrides
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let defaults = AppConfig::default();

        let config = Config::builder()
            // Built-in defaults
            .set_default("library.name", defaults.library.name)?
            .set_default(
                "library.books_path",
                defaults.library.books_path.to_string_lossy().into_owned(),
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            // Optional configuration files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. SHELF_LIBRARY__BOOKS_PATH)
            .add_source(
                Environment::with_prefix("SHELF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Command line wins over everything else
            .set_override_option(
                "library.books_path",
                overrides
                    .books_path
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
            )?
            .set_override_option("library.name", overrides.library_name.clone())?
            .set_override_option("logging.level", overrides.log_level.clone())?
            .build()?;

        config.try_deserialize()
    }

    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.logging.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: "My Library".to_string(),
            books_path: PathBuf::from("list_of_books.txt"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}
