//! The rule checker capability.

use std::fmt;

use stylemcp_core::{ValidationContext, Violation};
use stylemcp_pack::Pack;

/// Inspects text against one rule category of a pack.
///
/// Implementations must:
/// - leave the text untouched;
/// - report spans as byte offsets into the exact `text` passed in;
/// - be deterministic, returning identical violations in identical order
///   for identical input;
/// - return nothing, rather than fail, when their pack section is empty.
///
/// Register custom checkers on a [`Validator`](crate::Validator) with
/// `register()`; they run after the ones already registered.
pub trait RuleChecker: Send + Sync + fmt::Debug {
    /// Short identifier, e.g. `voice`.
    fn name(&self) -> &'static str;

    fn check(&self, text: &str, pack: &Pack, context: Option<&ValidationContext>) -> Vec<Violation>;
}
