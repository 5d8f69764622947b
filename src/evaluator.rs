//! Policy evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluation::PolicyEvaluation;
use crate::policy::PolicySpec;
use crate::rules::{
    RuleResult, digit_rule, lower_case_rule, max_length_rule, min_length_rule,
    special_character_rule, upper_case_rule, white_space_rule,
};

/// Evaluates a candidate password against a policy.
///
/// # Arguments
/// * `spec` - The policy to evaluate against
/// * `candidate` - The password to check; absent candidates are accepted,
///   "required" semantics belong to the host
///
/// # Returns
/// A `PolicyEvaluation` holding every violated rule, in rule order.
pub fn evaluate_password(spec: &PolicySpec, candidate: Option<&SecretString>) -> PolicyEvaluation {
    let Some(password) = candidate else {
        return PolicyEvaluation::default();
    };

    // Orchestrator: run every rule, never short-circuiting, so one pass
    // reports the complete correction list.
    let rules: [fn(&PolicySpec, &SecretString) -> RuleResult; 7] = [
        min_length_rule,
        max_length_rule,
        digit_rule,
        lower_case_rule,
        upper_case_rule,
        white_space_rule,
        special_character_rule,
    ];

    let mut violations = Vec::new();

    for rule in rules {
        if let Some(violation) = rule(spec, password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password rule violated: {}", violation);
            violations.push(violation);
        }
    }

    #[cfg(feature = "tracing")]
    if !violations.is_empty() {
        tracing::debug!("Candidate rejected with {} violation(s)", violations.len());
    }

    PolicyEvaluation { violations }
}

/// Async version that sends the evaluation result via channel.
///
/// If the token is already cancelled nothing is evaluated or sent, and the
/// receiver observes a closed channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    spec: &PolicySpec,
    candidate: Option<&SecretString>,
    token: CancellationToken,
    tx: mpsc::Sender<PolicyEvaluation>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("Password evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate_password(spec, candidate);

    if tx.send(evaluation).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::Violation;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_reports_all_violations() {
        let spec = PolicySpec::builder()
            .min_length(8)
            .max_length(20)
            .require_digit(true)
            .require_upper_case(true)
            .build()
            .unwrap();

        let evaluation = evaluate_password(&spec, Some(&secret("abc123")));

        assert!(!evaluation.is_accepted());
        assert_eq!(
            evaluation.violations,
            vec![Violation::TooShort(8), Violation::MissingUpperCase]
        );
    }

    #[test]
    fn test_evaluate_rejects_white_space() {
        let spec = PolicySpec::builder().max_length(10).build().unwrap();

        let evaluation = evaluate_password(&spec, Some(&secret("ab cd")));

        assert_eq!(evaluation.violations, vec![Violation::WhitespaceNotAllowed]);
    }

    #[test]
    fn test_evaluate_requires_special_character() {
        let spec = PolicySpec::builder()
            .max_length(100)
            .special_characters("!@#")
            .build()
            .unwrap();

        let evaluation = evaluate_password(&spec, Some(&secret("Secret1")));

        assert_eq!(
            evaluation.violations,
            vec![Violation::MissingSpecialCharacter("!@#".to_string())]
        );
        assert_eq!(
            evaluation.message().unwrap(),
            "At least one special character is required. Allowed special characters: !@#"
        );
    }

    #[test]
    fn test_evaluate_accepts_matching_candidate() {
        let spec = PolicySpec::builder()
            .max_length(100)
            .special_characters("!@#")
            .build()
            .unwrap();

        let evaluation = evaluate_password(&spec, Some(&secret("Secret1!")));

        assert!(evaluation.is_accepted());
        assert!(evaluation.violations.is_empty());
        assert_eq!(evaluation.message(), None);
    }

    #[test]
    fn test_evaluate_absent_candidate_is_accepted() {
        // Even the strictest policy accepts an absent candidate.
        let spec = PolicySpec::builder()
            .min_length(20)
            .max_length(20)
            .require_digit(true)
            .require_lower_case(true)
            .require_upper_case(true)
            .special_characters("!")
            .build()
            .unwrap();

        let evaluation = evaluate_password(&spec, None);

        assert!(evaluation.is_accepted());
        assert!(evaluation.violations.is_empty());
    }

    #[test]
    fn test_evaluate_empty_candidate() {
        let spec = PolicySpec::builder()
            .require_digit(true)
            .require_lower_case(true)
            .build()
            .unwrap();

        let evaluation = evaluate_password(&spec, Some(&secret("")));

        assert_eq!(
            evaluation.violations,
            vec![Violation::MissingDigit, Violation::MissingLowerCase]
        );
    }

    #[test]
    fn test_evaluate_violation_order_is_stable() {
        let spec = PolicySpec::builder()
            .min_length(10)
            .require_digit(true)
            .require_lower_case(true)
            .require_upper_case(true)
            .special_characters("!")
            .build()
            .unwrap();

        let evaluation = evaluate_password(&spec, Some(&secret(" ")));

        let codes: Vec<&str> = evaluation.violations.iter().map(Violation::code).collect();
        assert_eq!(
            codes,
            vec![
                "too_short",
                "missing_digit",
                "missing_lower_case",
                "missing_upper_case",
                "white_space_not_allowed",
                "missing_special_character",
            ]
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let spec = PolicySpec::builder()
            .min_length(8)
            .require_digit(true)
            .build()
            .unwrap();
        let candidate = secret("abc");

        let first = evaluate_password(&spec, Some(&candidate));
        let second = evaluate_password(&spec, Some(&candidate));

        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_unicode_candidate() {
        let spec = PolicySpec::builder()
            .min_length(4)
            .max_length(30)
            .require_digit(true)
            .build()
            .unwrap();

        let evaluation = evaluate_password(&spec, Some(&secret("日本語パスワード1")));

        assert!(evaluation.is_accepted());
    }

    #[test]
    fn test_evaluate_default_policy_accepts_anything() {
        let spec = PolicySpec::default();

        for candidate in ["", "a", "P@ss Word 123", "日本語"] {
            let evaluation = evaluate_password(&spec, Some(&secret(candidate)));
            assert!(evaluation.is_accepted(), "rejected {:?}", candidate);
        }
    }
}
