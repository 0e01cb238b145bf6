//! Pack-specific error types.
//!
//! Every variant carries the path it concerns so a failed load can be
//! traced back to a file without re-running it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during pack operations.
#[derive(Debug, Error)]
pub enum PackError {
    /// The manifest could not be read, parsed, or checked. Fatal to the load.
    #[error("failed to load manifest at {path}: {reason}")]
    ManifestLoad { path: PathBuf, reason: String },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Reading a file failed for a reason other than absence.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A document parsed but broke a constraint of its schema.
    #[error("invalid {document} document: {detail}")]
    Schema {
        document: &'static str,
        detail: String,
    },

    /// The packs root directory could not be listed.
    #[error("cannot read packs directory {path}: {source}")]
    PacksRootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_load_display() {
        let err = PackError::ManifestLoad {
            path: PathBuf::from("/packs/saas/manifest.yaml"),
            reason: "missing field `version`".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("/packs/saas/manifest.yaml"));
        assert!(msg.contains("missing field"));
    }

    #[test]
    fn file_not_found_display() {
        let err = PackError::FileNotFound {
            path: PathBuf::from("/tmp/missing.yaml"),
        };
        assert!(format!("{err}").contains("/tmp/missing.yaml"));
    }

    #[test]
    fn schema_display() {
        let err = PackError::Schema {
            document: "manifest",
            detail: "minScore must be within 0..=100".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("manifest"));
        assert!(msg.contains("minScore"));
    }

    #[test]
    fn packs_root_unreadable_display() {
        let err = PackError::PacksRootUnreadable {
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("/nope"));
        assert!(msg.contains("access denied"));
    }
}
