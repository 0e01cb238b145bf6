//! # stylemcp-pack — The Pack Store
//!
//! A style pack is a directory holding a `manifest.yaml` and the five
//! documents it names:
//!
//! - **Voice** ([`schema::voice`]): tone, vocabulary preferences and
//!   forbidden terms, "do-not" patterns, length/format constraints.
//! - **Copy patterns** ([`schema::copy_patterns`]): templated snippets per
//!   UI situation.
//! - **CTA rules** ([`schema::cta_rules`]): approved call-to-action phrasing,
//!   guidelines, anti-patterns, contextual rules.
//! - **Tokens** ([`schema::tokens`]): design tokens (JSON).
//! - **Tests** ([`schema::tests`]): expected validation outcomes for the
//!   pack's own self-test.
//!
//! ## Loading
//!
//! [`PackStore::load_pack`] reads the manifest first; a manifest that cannot
//! be read or parsed fails the load. The five documents are then read
//! concurrently. A document that is missing or fails its schema is replaced
//! with an empty default and reported in [`PackLoadResult::errors`], so a
//! loaded [`Pack`] is always structurally complete.
//!
//! ## Caching
//!
//! [`PackCache`] keys assembled packs by directory path. An entry is served
//! only while it is younger than the TTL and the manifest's modification
//! time is unchanged. [`PackListing`] caches the names under the packs root
//! and collapses concurrent scans into one.

pub mod cache;
pub mod config;
pub mod error;
pub mod listing;
pub mod parser;
pub mod schema;
pub mod store;

pub use cache::{CachePolicy, CacheStats, PackCache};
pub use config::{ConfigError, PackStoreConfig};
pub use error::{PackError, PackResult};
pub use listing::PackListing;
pub use schema::{
    CopyPatterns, CtaRules, Pack, PackDocument, PackManifest, RecoverableDocument, TestSuite,
    Tokens, Voice,
};
pub use store::{LoadOptions, PackLoadResult, PackStore, MANIFEST_FILE};
