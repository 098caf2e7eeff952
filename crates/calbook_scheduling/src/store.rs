// --- File: crates/calbook_scheduling/src/store.rs ---
//! Whole-file JSON persistence for bookings.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use calbook_common::error::CalbookError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to write bookings file: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize bookings: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<StoreError> for CalbookError {
    fn from(err: StoreError) -> Self {
        CalbookError::StorageError(err.to_string())
    }
}

/// A confirmed appointment as persisted in bookings.json.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Server-generated UUID.
    #[cfg_attr(
        feature = "openapi",
        schema(example = "7f8d2c1a-0b63-4c35-9a34-5de7f6c11b2f")
    )]
    pub id: String,
    pub name: String,
    pub email: String,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2026-03-02T08:00:00Z")
    )]
    pub start_time: DateTime<Utc>,
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2026-03-02T08:30:00Z")
    )]
    pub end_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub created_at: DateTime<Utc>,
}

/// File-backed booking store.
///
/// Reads are lenient whole-file loads. Mutations hold one lock across their
/// whole read-modify-write cycle so interleaved writers cannot drop each
/// other's changes; clones share the same lock.
#[derive(Debug, Clone)]
pub struct BookingStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl BookingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All bookings in insertion order. A missing or unusable file reads as
    /// no bookings.
    pub async fn load_all(&self) -> Vec<Booking> {
        self.read_list().await
    }

    /// Append one booking and rewrite the whole file.
    pub async fn append(&self, booking: Booking) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut bookings = self.read_list().await;
        bookings.push(booking);
        self.write_list(&bookings).await
    }

    /// Remove the booking with the given id. Returns the removed record, or
    /// `None` (without touching the file) when no booking matches.
    pub async fn remove_by_id(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut bookings = self.read_list().await;
        let index = match bookings.iter().position(|booking| booking.id == id) {
            Some(index) => index,
            None => return Ok(None),
        };
        let removed = bookings.remove(index);
        self.write_list(&bookings).await?;
        Ok(Some(removed))
    }

    async fn read_list(&self) -> Vec<Booking> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "Could not read bookings file at {}: {}",
                        self.path.display(),
                        err
                    );
                }
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(bookings) => bookings,
            Err(err) => {
                warn!(
                    "Bookings file at {} is not usable, treating as empty: {}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    async fn write_list(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        let pretty = serde_json::to_string_pretty(bookings)?;
        // The rewrite lands in a sibling file and renames over the target,
        // so lock-free readers always see a complete document.
        let scratch = self.path.with_extension("json.tmp");
        tokio::fs::write(&scratch, pretty).await?;
        tokio::fs::rename(&scratch, &self.path).await?;
        debug!(
            "Wrote {} bookings to {}",
            bookings.len(),
            self.path.display()
        );
        Ok(())
    }
}
