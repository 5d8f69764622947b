//! Length rules - candidate length against the configured bounds.

use secrecy::{ExposeSecret, SecretString};

use super::RuleResult;
use crate::evaluation::Violation;
use crate::policy::PolicySpec;

// Length is counted in characters, not bytes, so multi-byte candidates
// are measured the same way users count them.
fn char_count(candidate: &SecretString) -> usize {
    candidate.expose_secret().chars().count()
}

/// Checks the candidate against the policy minimum length.
///
/// # Returns
/// - `Some(violation)` if the candidate is too short
/// - `None` if the candidate meets the minimum
pub fn min_length_rule(spec: &PolicySpec, candidate: &SecretString) -> RuleResult {
    if char_count(candidate) < spec.min_length() {
        return Some(Violation::TooShort(spec.min_length()));
    }
    None
}

/// Checks the candidate against the policy maximum length.
///
/// # Returns
/// - `Some(violation)` if the candidate is too long
/// - `None` if the candidate fits the maximum
pub fn max_length_rule(spec: &PolicySpec, candidate: &SecretString) -> RuleResult {
    if char_count(candidate) > spec.max_length() {
        return Some(Violation::TooLong(spec.max_length()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(min: usize, max: usize) -> PolicySpec {
        PolicySpec::new(min, max, false, false, false, false, "").unwrap()
    }

    #[test]
    fn test_min_length_rule_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert_eq!(
            min_length_rule(&spec(8, 20), &pwd),
            Some(Violation::TooShort(8))
        );
    }

    #[test]
    fn test_min_length_rule_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(min_length_rule(&spec(8, 20), &pwd), None);
    }

    #[test]
    fn test_max_length_rule_too_long() {
        let pwd = SecretString::new("WayTooLongPassword123".to_string().into());
        assert_eq!(
            max_length_rule(&spec(0, 10), &pwd),
            Some(Violation::TooLong(10))
        );
    }

    #[test]
    fn test_max_length_rule_exactly_maximum() {
        let pwd = SecretString::new("1234567890".to_string().into());
        assert_eq!(max_length_rule(&spec(0, 10), &pwd), None);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 8 characters, 10 bytes
        let pwd = SecretString::new("pässwörd".to_string().into());
        assert_eq!(min_length_rule(&spec(8, 20), &pwd), None);
        assert_eq!(max_length_rule(&spec(0, 8), &pwd), None);
    }

    #[test]
    fn test_empty_candidate_with_zero_minimum() {
        let pwd = SecretString::new("".to_string().into());
        assert_eq!(min_length_rule(&spec(0, 10), &pwd), None);
    }
}
