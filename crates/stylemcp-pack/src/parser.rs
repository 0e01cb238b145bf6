//! Shared YAML/JSON document parsing.
//!
//! All document loads go through [`read_document`] so that every failure
//! carries the file path and maps onto the same [`PackError`] variants.

use std::path::Path;

use crate::error::{PackError, PackResult};
use crate::schema::{DocumentFormat, PackDocument};

/// Read `path` and parse it as document `T`, then apply `T`'s schema check.
pub async fn read_document<T: PackDocument>(path: &Path) -> PackResult<T> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PackError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PackError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_document(path, &content)
}

/// Parse already-read `content` as document `T`. `path` is used for error
/// context only.
pub fn parse_document<T: PackDocument>(path: &Path, content: &str) -> PackResult<T> {
    let document: T = match T::FORMAT {
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| PackError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        })?,
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| PackError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?,
    };
    document.check().map_err(|detail| PackError::Schema {
        document: T::LABEL,
        detail,
    })?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PackManifest, Tokens, Voice};

    #[test]
    fn yaml_document_parses() {
        let m: PackManifest =
            parse_document(Path::new("manifest.yaml"), "name: saas\nversion: 1.0.0\n").unwrap();
        assert_eq!(m.name, "saas");
    }

    #[test]
    fn json_document_parses() {
        let t: Tokens = parse_document(Path::new("tokens.json"), r#"{"name":"t"}"#).unwrap();
        assert_eq!(t.name, "t");
    }

    #[test]
    fn malformed_yaml_reports_path() {
        let err = parse_document::<Voice>(Path::new("/p/voice.yaml"), "name: [unclosed").unwrap_err();
        assert!(matches!(err, PackError::YamlParse { .. }));
        assert!(format!("{err}").contains("/p/voice.yaml"));
    }

    #[test]
    fn malformed_json_reports_path() {
        let err = parse_document::<Tokens>(Path::new("/p/tokens.json"), "{").unwrap_err();
        assert!(matches!(err, PackError::JsonParse { .. }));
    }

    #[test]
    fn schema_check_failure_is_reported() {
        let yaml = "name: x\nversion: 1.0.0\nconfig:\n  minScore: 250\n";
        let err = parse_document::<PackManifest>(Path::new("manifest.yaml"), yaml).unwrap_err();
        match err {
            PackError::Schema { document, detail } => {
                assert_eq!(document, "manifest");
                assert!(detail.contains("250"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document::<Voice>(&dir.path().join("voice.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, PackError::FileNotFound { .. }));
    }
}
