//! Password policy rules
//!
//! Each rule checks one aspect of the configured policy against the
//! candidate. Rules are independent; the evaluator runs all of them.

mod classes;
mod length;
mod special;
mod whitespace;

pub use classes::{digit_rule, lower_case_rule, upper_case_rule};
pub use length::{max_length_rule, min_length_rule};
pub use special::special_character_rule;
pub use whitespace::white_space_rule;

use crate::evaluation::Violation;

/// Result type for rule functions.
/// - `Some(violation)` - Rule failed
/// - `None` - Rule passed
pub type RuleResult = Option<Violation>;
