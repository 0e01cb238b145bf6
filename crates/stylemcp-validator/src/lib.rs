//! # stylemcp-validator — Rule Checking and Scoring
//!
//! A [`Validator`] holds an ordered registry of [`RuleChecker`]s. Each
//! checker inspects the text against one section of a [`Pack`] and emits
//! violations; the validator concatenates them in registration order,
//! scores the result, and applies the pack's pass/fail policy.
//!
//! ## Scoring
//!
//! Start at 100 and subtract a fixed penalty per violation (error 25,
//! warning 10, info 3) with no per-rule cap, then clamp to `[0, 100]`.
//!
//! ## Pass/fail
//!
//! In strict mode a text passes only with zero violations. Otherwise it
//! needs `score >= minScore` and no `error`-severity violation.
//!
//! ## Reference checkers
//!
//! [`Validator::new`] registers, in this order:
//! 1. [`checkers::VoiceChecker`]: vocabulary preferences, forbidden terms,
//!    do-not patterns.
//! 2. [`checkers::CtaChecker`]: anti-patterns, CTA guidelines, contextual
//!    rules.
//! 3. [`checkers::ConstraintsChecker`]: length and format limits.
//!
//! [`Pack`]: stylemcp_pack::Pack

pub mod checker;
pub mod checkers;
pub mod selftest;
pub mod validator;

mod matching;

pub use checker::RuleChecker;
pub use selftest::{run_pack_tests, PackTestReport, TestCaseReport, TestFilter};
pub use validator::{compute_score, is_valid, validate, Validator};
