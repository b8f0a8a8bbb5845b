//! Structured-record source — the profile, career and MBTI tables the engine reads.
//!
//! `RecordCache` serves a shared snapshot and reloads it from the configured
//! `RecordSource` once the snapshot is older than the refresh interval.

pub mod loader;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::profile::{CareerEntry, MbtiTable, ProfileRecord};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One consistent snapshot of all three tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Records {
    pub profile: ProfileRecord,
    pub careers: Vec<CareerEntry>,
    pub mbti: MbtiTable,
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn load(&self) -> Result<Records, RecordError>;
}

struct Snapshot {
    loaded_at: Instant,
    records: Arc<Records>,
}

pub struct RecordCache {
    source: Arc<dyn RecordSource>,
    refresh_interval: Duration,
    snapshot: RwLock<Option<Snapshot>>,
}

impl RecordCache {
    pub fn new(source: Arc<dyn RecordSource>, refresh_interval: Duration) -> Self {
        Self {
            source,
            refresh_interval,
            snapshot: RwLock::new(None),
        }
    }

    /// Returns the current snapshot, reloading when stale.
    ///
    /// A failed reload keeps serving the previous snapshot; only a failed first load errors.
    pub async fn get(&self) -> Result<Arc<Records>, RecordError> {
        {
            let guard = self.snapshot.read().await;
            if let Some(snapshot) = guard.as_ref() {
                if snapshot.loaded_at.elapsed() < self.refresh_interval {
                    return Ok(snapshot.records.clone());
                }
            }
        }

        let mut guard = self.snapshot.write().await;
        // Another request may have refreshed while we waited for the write lock.
        if let Some(snapshot) = guard.as_ref() {
            if snapshot.loaded_at.elapsed() < self.refresh_interval {
                return Ok(snapshot.records.clone());
            }
        }

        match self.source.load().await {
            Ok(records) => {
                info!(
                    "Records loaded: {} profile fields, {} career entries, {} MBTI types",
                    records.profile.len(),
                    records.careers.len(),
                    records.mbti.len()
                );
                if records.profile.is_empty() {
                    warn!("Profile table is empty; every field will read as unknown");
                }
                if records.mbti.is_empty() {
                    debug!("MBTI table is empty; personality questions get the fixed notice");
                }
                let records = Arc::new(records);
                *guard = Some(Snapshot {
                    loaded_at: Instant::now(),
                    records: records.clone(),
                });
                Ok(records)
            }
            Err(e) => match guard.as_mut() {
                Some(snapshot) => {
                    warn!("Record refresh failed, serving stale snapshot: {e}");
                    snapshot.loaded_at = Instant::now();
                    Ok(snapshot.records.clone())
                }
                None => Err(e),
            },
        }
    }
}
