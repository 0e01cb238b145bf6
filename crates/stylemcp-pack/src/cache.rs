//! # Pack Cache
//!
//! In-memory cache of assembled packs, keyed by pack directory path.
//!
//! An entry is served only while both hold:
//! - its wall-clock age is below [`CachePolicy::ttl`], and
//! - the manifest's current modification time equals the one recorded
//!   when the entry was stored.
//!
//! A stale entry is dropped on lookup. After each insert the cache is
//! pruned to [`CachePolicy::capacity`] by evicting the oldest insertions.
//!
//! The map sits behind a `parking_lot::Mutex` that is only ever held for
//! in-memory work, never across an `.await`. Two callers that both find an
//! entry stale will both reload and both insert; the last write wins.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use parking_lot::Mutex;

use crate::config::{DEFAULT_PACK_CAPACITY, DEFAULT_PACK_TTL};
use crate::store::PackLoadResult;

/// TTL and capacity of a [`PackCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub ttl: Duration,
    pub capacity: usize,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_PACK_TTL,
            capacity: DEFAULT_PACK_CAPACITY,
        }
    }
}

/// Point-in-time cache occupancy, for monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    pub ttl: Duration,
}

#[derive(Debug)]
struct CacheEntry {
    result: PackLoadResult,
    manifest_mtime: Option<SystemTime>,
    cached_at: Instant,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<PathBuf, CacheEntry>,
    /// Insertion order, oldest first.
    order: VecDeque<PathBuf>,
}

impl CacheState {
    fn remove(&mut self, path: &Path) -> Option<CacheEntry> {
        let entry = self.entries.remove(path)?;
        self.order.retain(|p| p != path);
        Some(entry)
    }
}

#[derive(Debug, Default)]
pub struct PackCache {
    policy: CachePolicy,
    state: Mutex<CacheState>,
}

impl PackCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Return the cached result for `path` if it is still fresh against
    /// `manifest_mtime`, marked `cached: true`. A stale entry is removed.
    pub fn lookup(&self, path: &Path, manifest_mtime: Option<SystemTime>) -> Option<PackLoadResult> {
        let mut state = self.state.lock();
        let entry = state.entries.get(path)?;
        let age = entry.cached_at.elapsed();
        if age < self.policy.ttl && entry.manifest_mtime == manifest_mtime {
            let mut hit = entry.result.clone();
            hit.cached = true;
            return Some(hit);
        }
        let expired = age >= self.policy.ttl;
        state.remove(path);
        tracing::debug!(path = %path.display(), expired, "dropped stale pack cache entry");
        None
    }

    /// Store `result` for `path`, stamped with `manifest_mtime` and the
    /// current instant, then evict the oldest entries beyond capacity.
    pub fn insert(&self, path: PathBuf, result: PackLoadResult, manifest_mtime: Option<SystemTime>) {
        let mut state = self.state.lock();
        state.remove(&path);
        let mut stored = result;
        stored.cached = false;
        state.order.push_back(path.clone());
        state.entries.insert(
            path,
            CacheEntry {
                result: stored,
                manifest_mtime,
                cached_at: Instant::now(),
            },
        );
        while state.entries.len() > self.policy.capacity {
            let Some(oldest) = state.order.pop_front() else {
                break;
            };
            state.entries.remove(&oldest);
            tracing::debug!(path = %oldest.display(), "evicted pack cache entry");
        }
    }

    pub fn remove(&self, path: &Path) -> bool {
        self.state.lock().remove(path).is_some()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.state.lock().entries.contains_key(path)
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.order.clear();
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            capacity: self.policy.capacity,
            ttl: self.policy.ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::schema::{Pack, PackManifest};

    fn result(name: &str) -> PackLoadResult {
        PackLoadResult {
            pack: Arc::new(Pack::with_manifest(PackManifest::new(name, "1.0.0"))),
            errors: Vec::new(),
            cached: false,
        }
    }

    fn mtime(secs: u64) -> Option<SystemTime> {
        Some(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
    }

    #[test]
    fn fresh_entry_is_served_as_cached() {
        let cache = PackCache::new(CachePolicy::default());
        cache.insert(PathBuf::from("/packs/saas"), result("saas"), mtime(10));
        let hit = cache.lookup(Path::new("/packs/saas"), mtime(10)).unwrap();
        assert!(hit.cached);
        assert_eq!(hit.pack.name(), "saas");
    }

    #[test]
    fn changed_mtime_invalidates_and_removes() {
        let cache = PackCache::new(CachePolicy::default());
        cache.insert(PathBuf::from("/packs/saas"), result("saas"), mtime(10));
        assert!(cache.lookup(Path::new("/packs/saas"), mtime(11)).is_none());
        assert!(!cache.contains(Path::new("/packs/saas")));
    }

    #[test]
    fn missing_manifest_mtime_is_compared_too() {
        let cache = PackCache::new(CachePolicy::default());
        cache.insert(PathBuf::from("/p"), result("p"), mtime(10));
        assert!(cache.lookup(Path::new("/p"), None).is_none());
    }

    #[test]
    fn zero_ttl_never_serves() {
        let cache = PackCache::new(CachePolicy {
            ttl: Duration::ZERO,
            capacity: 5,
        });
        cache.insert(PathBuf::from("/p"), result("p"), mtime(1));
        assert!(cache.lookup(Path::new("/p"), mtime(1)).is_none());
    }

    #[test]
    fn ttl_expiry() {
        let cache = PackCache::new(CachePolicy {
            ttl: Duration::from_millis(20),
            capacity: 5,
        });
        cache.insert(PathBuf::from("/p"), result("p"), mtime(1));
        assert!(cache.lookup(Path::new("/p"), mtime(1)).is_some());
        std::thread::sleep(Duration::from_millis(40));
        assert!(cache.lookup(Path::new("/p"), mtime(1)).is_none());
    }

    #[test]
    fn evicts_oldest_insertions_beyond_capacity() {
        let cache = PackCache::new(CachePolicy {
            ttl: DEFAULT_PACK_TTL,
            capacity: 2,
        });
        cache.insert(PathBuf::from("/a"), result("a"), mtime(1));
        cache.insert(PathBuf::from("/b"), result("b"), mtime(1));
        cache.insert(PathBuf::from("/c"), result("c"), mtime(1));
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(Path::new("/a")));
        assert!(cache.contains(Path::new("/b")));
        assert!(cache.contains(Path::new("/c")));
    }

    #[test]
    fn reinsertion_moves_entry_to_newest() {
        let cache = PackCache::new(CachePolicy {
            ttl: DEFAULT_PACK_TTL,
            capacity: 2,
        });
        cache.insert(PathBuf::from("/a"), result("a"), mtime(1));
        cache.insert(PathBuf::from("/b"), result("b"), mtime(1));
        cache.insert(PathBuf::from("/a"), result("a"), mtime(2));
        cache.insert(PathBuf::from("/c"), result("c"), mtime(1));
        assert!(cache.contains(Path::new("/a")));
        assert!(!cache.contains(Path::new("/b")));
    }

    #[test]
    fn clear_and_stats() {
        let cache = PackCache::new(CachePolicy::default());
        cache.insert(PathBuf::from("/a"), result("a"), None);
        let stats = cache.stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.capacity, 20);
        assert_eq!(stats.ttl, Duration::from_secs(60));
        cache.clear();
        assert!(cache.is_empty());
    }
}
