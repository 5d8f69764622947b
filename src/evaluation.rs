//! Evaluation result types - violations and the aggregated outcome.

use thiserror::Error;

/// A single violated policy rule.
///
/// Violations are ordinary data: the evaluator collects them into a
/// [`PolicyEvaluation`], it never raises them. The `Display` rendering is
/// the human-readable rejection text for that rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Min length must be {0}.")]
    TooShort(usize),
    #[error("Max length allowed is {0}.")]
    TooLong(usize),
    #[error("At least one digit is required.")]
    MissingDigit,
    #[error("At least one lower case character is required.")]
    MissingLowerCase,
    #[error("At least one upper case character is required.")]
    MissingUpperCase,
    #[error("White space is not allowed.")]
    WhitespaceNotAllowed,
    #[error("At least one special character is required. Allowed special characters: {0}")]
    MissingSpecialCharacter(String),
}

impl Violation {
    /// Stable snake_case identifier for host-side reporting.
    ///
    /// Hosts that map violations onto their own error mechanism should key
    /// on these instead of parsing message text.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::TooShort(_) => "too_short",
            Violation::TooLong(_) => "too_long",
            Violation::MissingDigit => "missing_digit",
            Violation::MissingLowerCase => "missing_lower_case",
            Violation::MissingUpperCase => "missing_upper_case",
            Violation::WhitespaceNotAllowed => "white_space_not_allowed",
            Violation::MissingSpecialCharacter(_) => "missing_special_character",
        }
    }
}

/// Outcome of evaluating one candidate against one policy.
///
/// Holds every violated rule in rule order; acceptance is simply the
/// absence of violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyEvaluation {
    pub violations: Vec<Violation>,
}

impl PolicyEvaluation {
    /// True when no rule was violated.
    pub fn is_accepted(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violation messages joined into one line.
    ///
    /// Returns `None` when the candidate was accepted. Callers that want
    /// per-rule reporting should consume `violations` directly.
    pub fn message(&self) -> Option<String> {
        if self.violations.is_empty() {
            return None;
        }
        let rendered: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        Some(rendered.join(" "))
    }
}
