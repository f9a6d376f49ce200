use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, ServerSettings, Settings};

/// The optional settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "personas.toml";

/// The environment variable that names the SQLite file.
pub const DATABASE_FILENAME_ENV: &str = "FILENAME";

/// Loads the application configuration.
///
/// Sources are layered, later ones winning: built-in defaults, `personas.toml`
/// (if present), `PERSONAS__SECTION__KEY` environment variables, and finally
/// `FILENAME` for the database path. Call `dotenvy::dotenv()` first if a `.env`
/// file should feed the environment.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from(
        Path::new(DEFAULT_CONFIG_FILE),
        std::env::var(DATABASE_FILENAME_ENV).ok(),
    )
}

/// Same as [`load_config`] but with an explicit settings file and database path.
pub fn load_config_from(
    config_file: &Path,
    database_filename: Option<String>,
) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5555_i64)?
        .set_default("server.body_limit", 1024_i64 * 1024)?
        .set_default("database.max_connections", 5_i64)?
        .set_default("database.acquire_timeout_secs", 5_i64)?
        .add_source(config::File::from(config_file).required(false))
        .add_source(
            config::Environment::with_prefix("PERSONAS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("database.filename", database_filename)?
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;

    tracing::debug!(?settings, "Configuration loaded.");
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.server.body_limit == 0 {
        return Err(ConfigError::ValidationError(
            "server.body_limit must be greater than zero".to_string(),
        ));
    }
    if settings.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
