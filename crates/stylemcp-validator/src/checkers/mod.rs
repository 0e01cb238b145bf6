//! Reference rule checkers.
//!
//! Each checker is a unit struct implementing [`RuleChecker`](crate::RuleChecker)
//! over a plain function of the pack section it reads, so the rules can
//! be exercised without assembling a whole pack.

pub mod constraints;
pub mod cta;
pub mod voice;

pub use constraints::{check_constraints, ConstraintsChecker};
pub use cta::{check_cta, CtaChecker};
pub use voice::{check_voice, VoiceChecker};
