// --- File: crates/calbook_config/src/store.rs ---
//! Load-or-initialize persistence for the owner's scheduling configuration.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use calbook_common::error::CalbookError;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::AppConfig;

// Self-heal writes are not serialized, so every attempt gets its own
// scratch file before the rename swap.
static SCRATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Errors from the self-healing write path. Read and parse problems never
/// error; they resolve to defaults.
#[derive(Error, Debug)]
pub enum ConfigStoreError {
    #[error("failed to write config file: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize default config: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<ConfigStoreError> for CalbookError {
    fn from(err: ConfigStoreError) -> Self {
        CalbookError::ConfigError(err.to_string())
    }
}

/// How [`ConfigStore::load_or_init`] obtained the configuration it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from the document on disk, merged over defaults.
    Loaded,
    /// The document was missing or unusable; defaults were written back.
    Initialized,
}

/// File-backed configuration store.
///
/// The document is read fresh on every call so the owner can edit
/// config.json while the server runs.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the config document.
    ///
    /// Success returns the stored top-level fields merged shallowly over the
    /// built-in defaults, without touching the file. Any read or parse
    /// failure rewrites the file with pristine defaults and returns those;
    /// the only error this can produce comes from that write itself.
    pub async fn load_or_init(&self) -> Result<(AppConfig, ConfigSource), ConfigStoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => match serde_json::from_str::<AppConfig>(&raw) {
                Ok(config) => return Ok((config, ConfigSource::Loaded)),
                Err(err) => {
                    warn!(
                        "Stored config at {} is not usable, rewriting defaults: {}",
                        self.path.display(),
                        err
                    );
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    "No config file at {} yet, initializing defaults",
                    self.path.display()
                );
            }
            Err(err) => {
                warn!(
                    "Could not read config file at {}, rewriting defaults: {}",
                    self.path.display(),
                    err
                );
            }
        }

        let defaults = AppConfig::default();
        let pretty = serde_json::to_string_pretty(&defaults)?;
        // Renaming a complete scratch file over the target keeps concurrent
        // readers on a whole document.
        let scratch = self.path.with_extension(format!(
            "json.tmp{}",
            SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        tokio::fs::write(&scratch, pretty).await?;
        tokio::fs::rename(&scratch, &self.path).await?;
        Ok((defaults, ConfigSource::Initialized))
    }
}
