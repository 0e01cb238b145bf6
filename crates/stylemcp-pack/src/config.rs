//! Pack store configuration.
//!
//! Defaults match a single-host deployment with packs under `./packs`.
//! Override via environment variables or explicit construction for tests.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CachePolicy;

/// Default lifetime of a cached pack.
pub const DEFAULT_PACK_TTL: Duration = Duration::from_secs(60);
/// Default number of packs kept in the cache.
pub const DEFAULT_PACK_CAPACITY: usize = 20;
/// Default lifetime of the cached available-packs list.
pub const DEFAULT_LIST_TTL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackStoreConfig {
    /// Directory whose immediate subdirectories are pack names.
    pub packs_root: PathBuf,
    pub pack_ttl: Duration,
    pub pack_capacity: usize,
    pub list_ttl: Duration,
}

impl Default for PackStoreConfig {
    fn default() -> Self {
        Self {
            packs_root: PathBuf::from("packs"),
            pack_ttl: DEFAULT_PACK_TTL,
            pack_capacity: DEFAULT_PACK_CAPACITY,
            list_ttl: DEFAULT_LIST_TTL,
        }
    }
}

impl PackStoreConfig {
    /// Defaults with a different packs root.
    pub fn with_root(packs_root: impl Into<PathBuf>) -> Self {
        Self {
            packs_root: packs_root.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `STYLEMCP_PACKS_DIR` (default: `packs`)
    /// - `STYLEMCP_PACK_CACHE_TTL_SECS` (default: 60)
    /// - `STYLEMCP_PACK_CACHE_MAX` (default: 20)
    /// - `STYLEMCP_PACK_LIST_TTL_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            packs_root: lookup("STYLEMCP_PACKS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.packs_root),
            pack_ttl: parse_var(&lookup, "STYLEMCP_PACK_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.pack_ttl),
            pack_capacity: parse_var(&lookup, "STYLEMCP_PACK_CACHE_MAX")?
                .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
                .unwrap_or(defaults.pack_capacity),
            list_ttl: parse_var(&lookup, "STYLEMCP_PACK_LIST_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.list_ttl),
        })
    }

    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy {
            ttl: self.pack_ttl,
            capacity: self.pack_capacity,
        }
    }
}

fn parse_var<F>(lookup: &F, var: &str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                var: var.to_string(),
                value: raw,
            }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} (expected a non-negative integer)")]
    Invalid { var: String, value: String },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = PackStoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, PackStoreConfig::default());
        assert_eq!(cfg.pack_ttl, Duration::from_secs(60));
        assert_eq!(cfg.pack_capacity, 20);
        assert_eq!(cfg.list_ttl, Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = PackStoreConfig::from_lookup(lookup_from(&[
            ("STYLEMCP_PACKS_DIR", "/srv/packs"),
            ("STYLEMCP_PACK_CACHE_TTL_SECS", "5"),
            ("STYLEMCP_PACK_CACHE_MAX", " 3 "),
            ("STYLEMCP_PACK_LIST_TTL_SECS", "0"),
        ]))
        .unwrap();
        assert_eq!(cfg.packs_root, PathBuf::from("/srv/packs"));
        assert_eq!(cfg.pack_ttl, Duration::from_secs(5));
        assert_eq!(cfg.pack_capacity, 3);
        assert_eq!(cfg.list_ttl, Duration::ZERO);
        assert_eq!(cfg.cache_policy().capacity, 3);
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let err = PackStoreConfig::from_lookup(lookup_from(&[("STYLEMCP_PACK_CACHE_MAX", "lots")]))
            .unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("STYLEMCP_PACK_CACHE_MAX"));
        assert!(msg.contains("lots"));
    }
}
