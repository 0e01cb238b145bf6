//! # Pack Store
//!
//! Loads packs from disk through the [`PackCache`] and lists the packs
//! available under the configured root.
//!
//! ## Failure model
//!
//! - The manifest is read first. If it cannot be read, parsed, or checked,
//!   the load fails with [`PackError::ManifestLoad`].
//! - The five documents are read concurrently and independently. A failed
//!   document is replaced with its empty default and reported as a string
//!   in [`PackLoadResult::errors`]; the load itself still succeeds.
//! - Nothing here retries. Disk errors are reported, not hidden.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::PackCache;
use crate::config::PackStoreConfig;
use crate::error::{PackError, PackResult};
use crate::listing::{modified, PackListing};
use crate::parser;
use crate::schema::{
    CopyPatterns, CtaRules, Pack, PackManifest, RecoverableDocument, TestSuite, Tokens, Voice,
};

/// File name of the manifest inside every pack directory.
pub const MANIFEST_FILE: &str = "manifest.yaml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip the cache lookup and read from disk. The fresh result is still
    /// stored in the cache.
    pub no_cache: bool,
}

impl LoadOptions {
    pub fn bypass_cache() -> Self {
        Self { no_cache: true }
    }
}

/// An assembled pack plus any non-fatal document errors.
#[derive(Debug, Clone)]
pub struct PackLoadResult {
    pub pack: Arc<Pack>,
    /// One human-readable entry per document that fell back to its default.
    pub errors: Vec<String>,
    /// Whether this result was served from the cache.
    pub cached: bool,
}

#[derive(Debug)]
pub struct PackStore {
    config: PackStoreConfig,
    cache: PackCache,
    listing: PackListing,
}

impl PackStore {
    pub fn new(config: PackStoreConfig) -> Self {
        let cache = PackCache::new(config.cache_policy());
        Self::with_cache(config, cache)
    }

    /// Build a store around an externally constructed cache.
    pub fn with_cache(config: PackStoreConfig, cache: PackCache) -> Self {
        let listing = PackListing::new(config.packs_root.clone(), config.list_ttl);
        Self {
            config,
            cache,
            listing,
        }
    }

    pub fn config(&self) -> &PackStoreConfig {
        &self.config
    }

    pub fn cache(&self) -> &PackCache {
        &self.cache
    }

    pub fn listing(&self) -> &PackListing {
        &self.listing
    }

    pub fn packs_root(&self) -> &Path {
        &self.config.packs_root
    }

    /// Load the pack in directory `pack_dir`.
    pub async fn load_pack(
        &self,
        pack_dir: impl AsRef<Path>,
        options: LoadOptions,
    ) -> PackResult<PackLoadResult> {
        let pack_dir = pack_dir.as_ref();
        let manifest_path = pack_dir.join(MANIFEST_FILE);

        if !options.no_cache {
            let mtime = modified(&manifest_path).await;
            if let Some(hit) = self.cache.lookup(pack_dir, mtime) {
                tracing::debug!(pack = %pack_dir.display(), "pack cache hit");
                return Ok(hit);
            }
        }
        tracing::debug!(pack = %pack_dir.display(), no_cache = options.no_cache, "loading pack from disk");

        let manifest: PackManifest = parser::read_document(&manifest_path)
            .await
            .map_err(|e| PackError::ManifestLoad {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;

        let files = &manifest.files;
        let voice_path = pack_dir.join(&files.voice);
        let copy_patterns_path = pack_dir.join(&files.copy_patterns);
        let cta_rules_path = pack_dir.join(&files.cta_rules);
        let tokens_path = pack_dir.join(&files.tokens);
        let tests_path = pack_dir.join(&files.tests);

        let (voice, copy_patterns, cta_rules, tokens, tests) = tokio::join!(
            parser::read_document::<Voice>(&voice_path),
            parser::read_document::<CopyPatterns>(&copy_patterns_path),
            parser::read_document::<CtaRules>(&cta_rules_path),
            parser::read_document::<Tokens>(&tokens_path),
            parser::read_document::<TestSuite>(&tests_path),
        );

        let mut errors = Vec::new();
        let pack = Pack {
            voice: recover(voice, &mut errors),
            copy_patterns: recover(copy_patterns, &mut errors),
            cta_rules: recover(cta_rules, &mut errors),
            tokens: recover(tokens, &mut errors),
            tests: recover(tests, &mut errors),
            manifest,
        };

        let result = PackLoadResult {
            pack: Arc::new(pack),
            errors,
            cached: false,
        };

        let mtime = modified(&manifest_path).await;
        self.cache
            .insert(pack_dir.to_path_buf(), result.clone(), mtime);
        Ok(result)
    }

    /// Load `<packs_root>/<name>`.
    pub async fn load_named(&self, name: &str, options: LoadOptions) -> PackResult<PackLoadResult> {
        self.load_pack(self.pack_path(name), options).await
    }

    pub fn pack_path(&self, name: &str) -> PathBuf {
        self.config.packs_root.join(name)
    }

    /// Names of the packs under the packs root.
    pub async fn list_available_packs(&self) -> PackResult<Vec<String>> {
        self.listing.list().await
    }

    /// Drop every cached pack and the cached pack list.
    pub fn clear_caches(&self) {
        self.cache.clear();
        self.listing.clear();
    }
}

fn recover<T: RecoverableDocument>(outcome: PackResult<T>, errors: &mut Vec<String>) -> T {
    match outcome {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(document = T::LABEL, error = %e, "pack document replaced with default");
            errors.push(format!("failed to load {}: {e}", T::LABEL));
            T::fallback()
        }
    }
}
