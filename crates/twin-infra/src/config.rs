//! Configuration loader for Twin.
//!
//! Reads `twin.toml` from the data directory and deserializes it into
//! [`TwinConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use twin_types::config::TwinConfig;

/// File name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "twin.toml";

/// Content written by `twin init`. Parses to [`TwinConfig::default()`].
pub const DEFAULT_CONFIG_TOML: &str = r#"# Twin configuration.
# Resource paths are relative to this directory unless absolute.

[resources]
facts = "facts.json"
summary = "summary.txt"
linkedin = "linkedin.txt"
style = "style.txt"

[logging]
json = false
# Exports spans to stdout; keep off when piping `twin prompt`.
otel = false
"#;

/// Load configuration from `{data_dir}/twin.toml`.
///
/// - If the file does not exist, returns [`TwinConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_config(data_dir: &Path) -> TwinConfig {
    let config_path = data_dir.join(CONFIG_FILE_NAME);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No twin.toml found at {}, using defaults", config_path.display());
            return TwinConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return TwinConfig::default();
        }
    };

    match toml::from_str::<TwinConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            TwinConfig::default()
        }
    }
}
