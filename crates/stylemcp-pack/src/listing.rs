//! # Available Packs Listing
//!
//! Caches the names of the immediate subdirectories of the packs root.
//! The cached list is reused while it is younger than the TTL and the
//! root's modification time is unchanged, so adding or removing a pack
//! directory is picked up without waiting out the TTL.
//!
//! Scans are single-flight: a caller that finds the list stale notes the
//! scan generation, then takes the scan gate. If a scan finished while it
//! waited, it receives that scan's outcome, error included, without
//! re-applying the TTL. Only a caller that saw no scan complete reads the
//! directory itself.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant, SystemTime};

use parking_lot::Mutex;

use crate::error::{PackError, PackResult};

#[derive(Debug, Clone)]
struct ListingEntry {
    names: Vec<String>,
    cached_at: Instant,
    dir_mtime: Option<SystemTime>,
}

/// Result of the most recent scan, handed to callers that waited on it.
#[derive(Debug, Clone)]
enum ScanOutcome {
    Listed(Vec<String>),
    Failed { kind: io::ErrorKind, message: String },
}

#[derive(Debug)]
pub struct PackListing {
    root: PathBuf,
    ttl: Duration,
    cached: Mutex<Option<ListingEntry>>,
    scan_gate: tokio::sync::Mutex<()>,
    /// Completed scans. Bumped under the gate after `last_outcome` is set.
    generation: AtomicU64,
    last_outcome: Mutex<Option<ScanOutcome>>,
    scans: AtomicU64,
}

impl PackListing {
    pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            root: root.into(),
            ttl,
            cached: Mutex::new(None),
            scan_gate: tokio::sync::Mutex::new(()),
            generation: AtomicU64::new(0),
            last_outcome: Mutex::new(None),
            scans: AtomicU64::new(0),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the pack directories under the root, sorted.
    pub async fn list(&self) -> PackResult<Vec<String>> {
        let seen = self.generation.load(Ordering::Acquire);
        if let Some(names) = self.fresh(modified(&self.root).await) {
            return Ok(names);
        }

        let _gate = self.scan_gate.lock().await;
        if self.generation.load(Ordering::Acquire) != seen {
            let outcome = self.last_outcome.lock().clone();
            if let Some(outcome) = outcome {
                return self.replay(outcome);
            }
        }

        self.scans.fetch_add(1, Ordering::Relaxed);
        let result = scan(&self.root).await;
        let outcome = match &result {
            Ok(names) => {
                // Re-stat after reading in case the directory changed mid-scan.
                let dir_mtime = modified(&self.root).await;
                tracing::debug!(
                    root = %self.root.display(),
                    count = names.len(),
                    "scanned packs directory"
                );
                *self.cached.lock() = Some(ListingEntry {
                    names: names.clone(),
                    cached_at: Instant::now(),
                    dir_mtime,
                });
                ScanOutcome::Listed(names.clone())
            }
            Err(e) => {
                tracing::warn!(root = %self.root.display(), error = %e, "packs directory scan failed");
                *self.cached.lock() = None;
                ScanOutcome::Failed {
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        };
        *self.last_outcome.lock() = Some(outcome);
        self.generation.fetch_add(1, Ordering::Release);
        result.map_err(|source| self.unreadable(source))
    }

    /// Number of directory scans performed so far.
    pub fn scan_count(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        *self.cached.lock() = None;
    }

    fn replay(&self, outcome: ScanOutcome) -> PackResult<Vec<String>> {
        match outcome {
            ScanOutcome::Listed(names) => Ok(names),
            ScanOutcome::Failed { kind, message } => Err(self.unreadable(io::Error::new(kind, message))),
        }
    }

    fn unreadable(&self, source: io::Error) -> PackError {
        PackError::PacksRootUnreadable {
            path: self.root.clone(),
            source,
        }
    }

    fn fresh(&self, dir_mtime: Option<SystemTime>) -> Option<Vec<String>> {
        let cached = self.cached.lock();
        let entry = cached.as_ref()?;
        if entry.cached_at.elapsed() < self.ttl && entry.dir_mtime == dir_mtime {
            Some(entry.names.clone())
        } else {
            None
        }
    }
}

/// Modification time of `path`, or `None` if it cannot be read.
pub(crate) async fn modified(path: &Path) -> Option<SystemTime> {
    tokio::fs::metadata(path).await.ok()?.modified().ok()
}

async fn scan(root: &Path) -> io::Result<Vec<String>> {
    let mut dir = tokio::fs::read_dir(root).await?;
    let mut names = Vec::new();
    while let Some(entry) = dir.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}
