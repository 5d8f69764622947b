//! Character class rules - required digit, lower case and upper case.
//!
//! Classes are the ASCII ranges `0-9`, `a-z` and `A-Z`; no locale-aware
//! classification, so results are identical on every platform.

use secrecy::{ExposeSecret, SecretString};

use super::RuleResult;
use crate::evaluation::Violation;
use crate::policy::PolicySpec;

/// Checks that the candidate contains a decimal digit, when required.
pub fn digit_rule(spec: &PolicySpec, candidate: &SecretString) -> RuleResult {
    if spec.require_digit()
        && !candidate
            .expose_secret()
            .chars()
            .any(|c| c.is_ascii_digit())
    {
        return Some(Violation::MissingDigit);
    }
    None
}

/// Checks that the candidate contains a lower case letter, when required.
pub fn lower_case_rule(spec: &PolicySpec, candidate: &SecretString) -> RuleResult {
    if spec.require_lower_case()
        && !candidate
            .expose_secret()
            .chars()
            .any(|c| c.is_ascii_lowercase())
    {
        return Some(Violation::MissingLowerCase);
    }
    None
}

/// Checks that the candidate contains an upper case letter, when required.
pub fn upper_case_rule(spec: &PolicySpec, candidate: &SecretString) -> RuleResult {
    if spec.require_upper_case()
        && !candidate
            .expose_secret()
            .chars()
            .any(|c| c.is_ascii_uppercase())
    {
        return Some(Violation::MissingUpperCase);
    }
    None
}
