//! Application state shared by the CLI commands.

use std::path::PathBuf;

use twin_infra::config::load_config;
use twin_infra::filesystem::{resolve_data_dir, ProfileLoader};
use twin_types::config::TwinConfig;

/// Resolved data directory, its configuration and the resource loader.
pub struct AppState {
    pub data_dir: PathBuf,
    pub config: TwinConfig,
    pub loader: ProfileLoader,
}

impl AppState {
    /// Resolve the data directory and read `twin.toml`.
    ///
    /// Does not touch the resource files; commands load them on demand.
    pub async fn init(data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(resolve_data_dir);
        let config = load_config(&data_dir).await;
        let loader = ProfileLoader::new(&data_dir, config.resources.clone());

        Self {
            data_dir,
            config,
            loader,
        }
    }
}
