//! Special character rule - membership in the configured character set.

use secrecy::{ExposeSecret, SecretString};

use super::RuleResult;
use crate::evaluation::Violation;
use crate::policy::PolicySpec;

/// Checks that the candidate contains one of the configured special
/// characters.
///
/// The configured string is a literal set of characters, not a pattern:
/// a configured `[` or `\` is just an accepted character. A blank
/// configuration disables the rule.
pub fn special_character_rule(spec: &PolicySpec, candidate: &SecretString) -> RuleResult {
    let allowed = spec.special_set();
    if allowed.is_empty() {
        return None;
    }

    let found = candidate
        .expose_secret()
        .chars()
        .any(|c| allowed.contains(&c));
    if !found {
        return Some(Violation::MissingSpecialCharacter(
            spec.special_characters().to_string(),
        ));
    }
    None
}
