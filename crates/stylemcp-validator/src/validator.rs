//! # Validator
//!
//! Runs the registered checkers, scores the combined violations, and
//! applies the pack's pass/fail policy.

use stylemcp_core::{
    Severity, Summary, Timestamp, ValidationContext, ValidationMetadata, ValidationResult,
    Violation,
};
use stylemcp_pack::schema::manifest::PackConfig;
use stylemcp_pack::Pack;

use crate::checker::RuleChecker;
use crate::checkers::{ConstraintsChecker, CtaChecker, VoiceChecker};

const MAX_SCORE: u32 = 100;

/// `100 - Σ penalty`, clamped to `[0, 100]`.
pub fn compute_score(violations: &[Violation]) -> u8 {
    let penalty: u32 = violations
        .iter()
        .map(|v| v.severity.penalty())
        .fold(0, u32::saturating_add);
    // Bounded by MAX_SCORE, so the conversion cannot fail.
    u8::try_from(MAX_SCORE.saturating_sub(penalty)).unwrap_or(u8::MAX)
}

/// Pass/fail decision for a scored set of violations.
pub fn is_valid(config: &PackConfig, score: u8, violations: &[Violation]) -> bool {
    if config.strict_mode {
        violations.is_empty()
    } else {
        f64::from(score) >= config.min_score && !violations.iter().any(|v| v.severity == Severity::Error)
    }
}

/// An ordered registry of rule checkers.
#[derive(Debug)]
pub struct Validator {
    checkers: Vec<Box<dyn RuleChecker>>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// The reference registry: voice, CTA, constraints.
    pub fn new() -> Self {
        let mut validator = Self::empty();
        validator
            .register(VoiceChecker)
            .register(CtaChecker)
            .register(ConstraintsChecker);
        validator
    }

    pub fn empty() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    /// Append a checker. Checkers run in registration order.
    pub fn register(&mut self, checker: impl RuleChecker + 'static) -> &mut Self {
        self.checkers.push(Box::new(checker));
        self
    }

    pub fn checker_names(&self) -> Vec<&'static str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }

    pub fn validate(
        &self,
        pack: &Pack,
        text: &str,
        context: Option<&ValidationContext>,
    ) -> ValidationResult {
        let violations: Vec<Violation> = self
            .checkers
            .iter()
            .flat_map(|checker| checker.check(text, pack, context))
            .collect();

        let score = compute_score(&violations);
        let valid = is_valid(&pack.manifest.config, score, &violations);
        tracing::debug!(
            pack = pack.name(),
            score,
            valid,
            violations = violations.len(),
            "validated text"
        );

        ValidationResult {
            valid,
            score,
            input: text.to_string(),
            summary: Summary::from_violations(&violations),
            violations,
            metadata: ValidationMetadata {
                pack_name: pack.name().to_string(),
                pack_version: pack.version().to_string(),
                validated_at: Timestamp::now(),
            },
        }
    }
}

/// Validate with the reference registry.
pub fn validate(pack: &Pack, text: &str, context: Option<&ValidationContext>) -> ValidationResult {
    Validator::new().validate(pack, text, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stylemcp_core::Span;
    use stylemcp_pack::schema::manifest::PackManifest;

    fn violation(severity: Severity, ordinal: usize) -> Violation {
        Violation::new("test.rule", severity, "m", ordinal)
    }

    fn pack_with_voice(voice_yaml: &str) -> Pack {
        let mut pack = Pack::with_manifest(PackManifest::new("unit", "1.0.0"));
        pack.voice = serde_yaml::from_str(voice_yaml).unwrap();
        pack
    }

    fn severity() -> impl Strategy<Value = Severity> {
        prop_oneof![
            Just(Severity::Error),
            Just(Severity::Warning),
            Just(Severity::Info)
        ]
    }

    #[test]
    fn score_penalties() {
        assert_eq!(compute_score(&[]), 100);
        assert_eq!(compute_score(&[violation(Severity::Warning, 0)]), 90);
        assert_eq!(
            compute_score(&[
                violation(Severity::Error, 0),
                violation(Severity::Warning, 1),
                violation(Severity::Info, 2),
            ]),
            62
        );
        let many: Vec<_> = (0..5).map(|i| violation(Severity::Error, i)).collect();
        assert_eq!(compute_score(&many), 0);
    }

    #[test]
    fn validity_non_strict() {
        let config = PackConfig::default();
        assert!(is_valid(&config, 90, &[violation(Severity::Warning, 0)]));
        assert!(!is_valid(&config, 75, &[violation(Severity::Error, 0)]));
        assert!(!is_valid(&config, 69, &[]));
        assert!(is_valid(&config, 70, &[]));
    }

    #[test]
    fn validity_strict() {
        let config = PackConfig {
            strict_mode: true,
            ..PackConfig::default()
        };
        assert!(is_valid(&config, 100, &[]));
        assert!(!is_valid(&config, 97, &[violation(Severity::Info, 0)]));
    }

    #[test]
    fn assist_scenario() {
        let pack = pack_with_voice(
            "name: v\nvocabulary:\n  rules:\n    - preferred: help\n      avoid: [assist]\n",
        );
        let result = validate(&pack, "We will Assist you.", None);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].suggestion.as_deref(), Some("help"));
        assert_eq!(result.violations[0].position, Some(Span::from(8..14)));
        assert_eq!(result.score, 90);
        assert!(result.valid);
        assert_eq!(result.summary.warnings, 1);
        assert_eq!(result.metadata.pack_name, "unit");
        assert_eq!(result.input, "We will Assist you.");
    }

    #[test]
    fn checkers_run_in_registration_order() {
        let pack = pack_with_voice(
            "name: v\nvocabulary:\n  forbidden: [synergy]\nconstraints:\n  allowExclamation: false\n",
        );
        let result = validate(&pack, "Synergy!", None);
        let rules: Vec<_> = result.violations.iter().map(|v| v.rule.as_str()).collect();
        assert_eq!(rules, vec!["vocabulary.forbidden", "constraints.exclamation"]);
        assert!(!result.valid);
    }

    #[test]
    fn empty_registry_always_scores_full() {
        let pack = pack_with_voice("name: v\nvocabulary:\n  forbidden: [synergy]\n");
        let result = Validator::empty().validate(&pack, "synergy", None);
        assert!(result.violations.is_empty());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn default_registry_names() {
        assert_eq!(Validator::new().checker_names(), vec!["voice", "cta", "constraints"]);
    }

    proptest! {
        #[test]
        fn score_stays_in_bounds(severities in proptest::collection::vec(severity(), 0..40)) {
            let violations: Vec<_> = severities
                .into_iter()
                .enumerate()
                .map(|(i, s)| violation(s, i))
                .collect();
            let score = compute_score(&violations);
            prop_assert!(score <= 100);
        }

        #[test]
        fn adding_a_violation_never_raises_the_score(
            severities in proptest::collection::vec(severity(), 0..20),
            extra in severity(),
        ) {
            let mut violations: Vec<_> = severities
                .into_iter()
                .enumerate()
                .map(|(i, s)| violation(s, i))
                .collect();
            let before = compute_score(&violations);
            violations.push(violation(extra, violations.len()));
            prop_assert!(compute_score(&violations) <= before);
        }
    }
}
