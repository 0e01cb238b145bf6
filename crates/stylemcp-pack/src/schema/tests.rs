//! Pack test suite: inputs paired with the validation outcome the pack's
//! authors expect.

use serde::{Deserialize, Serialize};
use stylemcp_core::{Severity, ValidationContext};

use super::{
    default_document_version, lenient_string, score_in_range, DocumentFormat, PackDocument,
    RecoverableDocument,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    #[serde(default = "default_document_version", deserialize_with = "lenient_string")]
    pub version: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tests: Vec<TestCase>,
    #[serde(default)]
    pub config: TestSuiteConfig,
}

impl PackDocument for TestSuite {
    const LABEL: &'static str = "tests";
    const FORMAT: DocumentFormat = DocumentFormat::Yaml;

    fn check(&self) -> Result<(), String> {
        for case in &self.tests {
            if let Some(min) = case.expect.min_score {
                score_in_range(&format!("tests[{}].expect.minScore", case.id), min)?;
            }
            if let Some(max) = case.expect.max_score {
                score_in_range(&format!("tests[{}].expect.maxScore", case.id), max)?;
            }
        }
        Ok(())
    }
}

impl RecoverableDocument for TestSuite {
    fn fallback() -> Self {
        Self {
            version: default_document_version(),
            name: "default".to_string(),
            description: None,
            tests: Vec::new(),
            config: TestSuiteConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuiteConfig {
    #[serde(default)]
    pub stop_on_first_failure: bool,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub input: String,
    pub expect: TestExpectation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ValidationContext>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestExpectation {
    pub pass: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<ExpectedViolation>>,
    /// Rules that must not be violated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_violations: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedViolation {
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylemcp_core::ContentType;

    const TESTS_YAML: &str = r#"
name: saas-tests
config:
  stopOnFirstFailure: true
tests:
  - id: prefers-help
    name: Flags assist
    input: We will assist you.
    expect:
      pass: true
      maxScore: 95
      violations:
        - rule: vocabulary.preferred
          severity: warning
      noViolations: [vocabulary.forbidden]
    context:
      type: ui-copy
      component: banner
    tags: [vocabulary]
"#;

    #[test]
    fn parses_test_suite() {
        let s: TestSuite = serde_yaml::from_str(TESTS_YAML).unwrap();
        assert!(s.config.stop_on_first_failure);
        assert!(!s.config.verbose);
        let case = &s.tests[0];
        assert_eq!(case.expect.max_score, Some(95.0));
        let expected = case.expect.violations.as_ref().unwrap();
        assert_eq!(expected[0].severity, Some(Severity::Warning));
        let ctx = case.context.as_ref().unwrap();
        assert_eq!(ctx.content_type, Some(ContentType::UiCopy));
        assert_eq!(case.tags, vec!["vocabulary"]);
        assert!(s.check().is_ok());
    }

    #[test]
    fn out_of_range_expected_score_fails_check() {
        let mut s: TestSuite = serde_yaml::from_str(TESTS_YAML).unwrap();
        s.tests[0].expect.min_score = Some(101.0);
        assert!(s.check().unwrap_err().contains("prefers-help"));
    }

    #[test]
    fn tests_list_is_required() {
        assert!(serde_yaml::from_str::<TestSuite>("name: x\n").is_err());
    }
}
