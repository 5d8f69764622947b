//! White space rule - rejects candidates containing spaces unless allowed.

use secrecy::{ExposeSecret, SecretString};

use super::RuleResult;
use crate::evaluation::Violation;
use crate::policy::PolicySpec;

/// Checks that the candidate contains no white space, unless the policy
/// allows it.
pub fn white_space_rule(spec: &PolicySpec, candidate: &SecretString) -> RuleResult {
    if !spec.allow_white_space()
        && candidate
            .expose_secret()
            .chars()
            .any(|c| c.is_ascii_whitespace())
    {
        return Some(Violation::WhitespaceNotAllowed);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(allow: bool) -> PolicySpec {
        PolicySpec::new(0, 100, false, false, false, allow, "").unwrap()
    }

    #[test]
    fn test_white_space_rule_rejects_space() {
        let pwd = SecretString::new("ab cd".to_string().into());
        assert_eq!(
            white_space_rule(&spec(false), &pwd),
            Some(Violation::WhitespaceNotAllowed)
        );
    }

    #[test]
    fn test_white_space_rule_rejects_tab_and_newline() {
        for candidate in ["ab\tcd", "ab\ncd"] {
            let pwd = SecretString::new(candidate.to_string().into());
            assert_eq!(
                white_space_rule(&spec(false), &pwd),
                Some(Violation::WhitespaceNotAllowed)
            );
        }
    }

    #[test]
    fn test_white_space_rule_allows_when_configured() {
        let pwd = SecretString::new("pass phrase with spaces".to_string().into());
        assert_eq!(white_space_rule(&spec(true), &pwd), None);
    }

    #[test]
    fn test_white_space_rule_no_white_space() {
        let pwd = SecretString::new("NoSpaces123!".to_string().into());
        assert_eq!(white_space_rule(&spec(false), &pwd), None);
    }
}
