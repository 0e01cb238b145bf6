//! # Pack Self-Tests
//!
//! Runs the cases in a pack's `tests.yaml` through a validator and
//! compares each outcome with the case's expectation.

use serde::Serialize;
use stylemcp_core::ValidationResult;
use stylemcp_pack::schema::tests::{TestCase, TestExpectation};
use stylemcp_pack::Pack;

use crate::validator::Validator;

/// Selects which test cases run. An empty tag list selects every case;
/// otherwise a case runs when it carries at least one of the tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestFilter {
    pub tags: Vec<String>,
}

impl TestFilter {
    pub fn tagged(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn selects(&self, case: &TestCase) -> bool {
        self.tags.is_empty() || case.tags.iter().any(|t| self.tags.contains(t))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseReport {
    pub id: String,
    pub name: String,
    pub passed: bool,
    pub score: u8,
    pub valid: bool,
    /// One entry per unmet expectation.
    pub failures: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackTestReport {
    pub pack_name: String,
    pub passed: usize,
    pub failed: usize,
    /// Cases excluded by the filter or left unrun after an early stop.
    pub skipped: usize,
    pub stopped_early: bool,
    pub cases: Vec<TestCaseReport>,
}

impl PackTestReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl Validator {
    pub fn run_pack_tests(&self, pack: &Pack, filter: &TestFilter) -> PackTestReport {
        let suite = &pack.tests;
        let mut report = PackTestReport {
            pack_name: pack.name().to_string(),
            passed: 0,
            failed: 0,
            skipped: 0,
            stopped_early: false,
            cases: Vec::new(),
        };

        for (index, case) in suite.tests.iter().enumerate() {
            if !filter.selects(case) {
                report.skipped += 1;
                continue;
            }
            let result = self.validate(pack, &case.input, case.context.as_ref());
            let failures = unmet_expectations(&case.expect, &result);
            let passed = failures.is_empty();
            if passed {
                report.passed += 1;
            } else {
                report.failed += 1;
                if suite.config.verbose {
                    tracing::info!(case = %case.id, ?failures, "pack test failed");
                }
            }
            report.cases.push(TestCaseReport {
                id: case.id.clone(),
                name: case.name.clone(),
                passed,
                score: result.score,
                valid: result.valid,
                failures,
            });

            if !passed && suite.config.stop_on_first_failure {
                report.stopped_early = true;
                report.skipped += suite.tests.len() - index - 1;
                break;
            }
        }

        tracing::debug!(
            pack = %report.pack_name,
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            "ran pack tests"
        );
        report
    }
}

/// Run the pack's test suite with the reference registry.
pub fn run_pack_tests(pack: &Pack, filter: &TestFilter) -> PackTestReport {
    Validator::new().run_pack_tests(pack, filter)
}

fn unmet_expectations(expect: &TestExpectation, result: &ValidationResult) -> Vec<String> {
    let mut failures = Vec::new();
    let score = f64::from(result.score);

    if expect.pass != result.valid {
        failures.push(format!("expected pass={}, got pass={}", expect.pass, result.valid));
    }
    if let Some(min) = expect.min_score {
        if score < min {
            failures.push(format!("score {} is below minScore {min}", result.score));
        }
    }
    if let Some(max) = expect.max_score {
        if score > max {
            failures.push(format!("score {} is above maxScore {max}", result.score));
        }
    }
    for expected in expect.violations.iter().flatten() {
        let found = result.violations_for(&expected.rule).any(|v| {
            expected
                .severity
                .map_or(true, |severity| v.severity == severity)
        });
        if !found {
            match expected.severity {
                Some(severity) => failures.push(format!(
                    "expected a {severity} violation of {}",
                    expected.rule
                )),
                None => failures.push(format!("expected a violation of {}", expected.rule)),
            }
        }
    }
    for rule in expect.no_violations.iter().flatten() {
        if result.violations_for(rule).next().is_some() {
            failures.push(format!("unexpected violation of {rule}"));
        }
    }
    failures
}
