use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: config::ConfigError,
    },
}

/// The environment overlay: `LBITES__` prefix, `__` as the nesting separator,
/// values parsed into their target types (ports, booleans).
fn env_overlay() -> Environment {
    Environment::with_prefix("LBITES")
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `server.toml`). If no path is provided,
///    it defaults to `"server"`. The file is optional; when absent, every value falls back to
///    its documented default.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `LBITES__`. Nested structures are accessed using double underscores
///    (e.g., `LBITES__SERVER__PORT` maps to `server.port`, `LBITES__FEATURES__AI_CHAT`
///    to `features.ai_chat`).
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Arguments
/// * `path`: An optional file path to the configuration source. Defaults to the `server` file
///   in the current working directory.
///
/// # Errors
/// This function will return an error if:
/// * The configuration file exists but cannot be parsed.
/// * The merged sources do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use lbites_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(env_overlay());

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
