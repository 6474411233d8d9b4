//! Filesystem adapters for Twin.
//!
//! Loads the four persona resource files from a data directory into a
//! `ProfileSnapshot`, and scaffolds new data directories from templates.
//!
//! Default layout:
//! ```text
//! {data_dir}/
//!   twin.toml
//!   facts.json
//!   summary.txt
//!   linkedin.txt
//!   style.txt
//! ```

pub mod facts;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use twin_core::templates::generate_default;
use twin_types::config::ResourcePaths;
use twin_types::error::ResourceError;
use twin_types::profile::{ProfileSnapshot, ResourceKind};

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};

/// Loads persona resources from a data directory.
#[derive(Debug, Clone)]
pub struct ProfileLoader {
    data_dir: PathBuf,
    paths: ResourcePaths,
}

/// Whether a resource was found and usable, for `twin check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStatus {
    pub kind: ResourceKind,
    pub path: PathBuf,
    pub present: bool,
}

impl ProfileLoader {
    pub fn new(data_dir: impl Into<PathBuf>, paths: ResourcePaths) -> Self {
        Self {
            data_dir: data_dir.into(),
            paths,
        }
    }

    /// Absolute path of a resource file.
    pub fn path_for(&self, kind: ResourceKind) -> PathBuf {
        self.paths.resolve(&self.data_dir, kind)
    }

    /// Read every resource file into a snapshot.
    ///
    /// A file that does not exist becomes `None` (logged at warn level) so the
    /// prompt builder can report it as missing. Any other read failure, or a
    /// facts file that is not a valid identity object, is an error.
    pub async fn load(&self) -> Result<ProfileSnapshot, ResourceError> {
        let facts_path = self.path_for(ResourceKind::Facts);
        let identity = match read_optional(&facts_path).await? {
            Some(content) => Some(facts::parse_facts(&facts_path, &content)?),
            None => None,
        };

        let snapshot = ProfileSnapshot {
            identity,
            summary: read_optional(&self.path_for(ResourceKind::Summary)).await?,
            linkedin: read_optional(&self.path_for(ResourceKind::LinkedIn)).await?,
            style: read_optional(&self.path_for(ResourceKind::Style)).await?,
        };

        tracing::debug!(
            data_dir = %self.data_dir.display(),
            missing = ?snapshot.missing(),
            "Loaded persona resources"
        );

        Ok(snapshot)
    }

    /// Per-resource presence report for a loaded snapshot.
    pub fn status(&self, snapshot: &ProfileSnapshot) -> Vec<ResourceStatus> {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| ResourceStatus {
                kind,
                path: self.path_for(kind),
                present: snapshot.has(kind),
            })
            .collect()
    }

    /// Write starter resource files and a default `twin.toml`.
    ///
    /// Existing files are never overwritten. Returns the paths that were
    /// actually created.
    pub async fn scaffold(&self, full_name: &str, name: &str) -> Result<Vec<PathBuf>, ResourceError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| ResourceError::Io {
                path: self.data_dir.clone(),
                source,
            })?;

        let mut created = Vec::new();

        let config_path = self.data_dir.join(CONFIG_FILE_NAME);
        if write_if_absent(&config_path, DEFAULT_CONFIG_TOML).await? {
            created.push(config_path);
        }

        for kind in ResourceKind::ALL {
            let path = self.path_for(kind);
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| ResourceError::Io {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
            if write_if_absent(&path, &generate_default(kind, full_name, name)).await? {
                created.push(path);
            } else {
                tracing::info!("Keeping existing {}", path.display());
            }
        }

        Ok(created)
    }
}

/// Read a UTF-8 file, mapping "not found" to `None`.
async fn read_optional(path: &Path) -> Result<Option<String>, ResourceError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!("Resource file not found: {}", path.display());
            Ok(None)
        }
        Err(source) => Err(ResourceError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Create a file with `content` unless it already exists.
async fn write_if_absent(path: &Path, content: &str) -> Result<bool, ResourceError> {
    let io_err = |source: std::io::Error| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = match tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(io_err(err)),
    };

    file.write_all(content.as_bytes()).await.map_err(io_err)?;
    file.flush().await.map_err(io_err)?;
    Ok(true)
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `TWIN_DATA_DIR` environment variable
/// 2. `~/.twin`
/// 3. `.twin` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TWIN_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".twin");
    }

    PathBuf::from(".twin")
}
