//! Environment policy source
//!
//! Builds a policy from `PWD_POLICY_*` environment variables.

use crate::policy::{PolicyBuilder, PolicyError, PolicySpec};

const MIN_LENGTH_VAR: &str = "PWD_POLICY_MIN_LENGTH";
const MAX_LENGTH_VAR: &str = "PWD_POLICY_MAX_LENGTH";
const REQUIRE_DIGIT_VAR: &str = "PWD_POLICY_REQUIRE_DIGIT";
const REQUIRE_LOWER_CASE_VAR: &str = "PWD_POLICY_REQUIRE_LOWER_CASE";
const REQUIRE_UPPER_CASE_VAR: &str = "PWD_POLICY_REQUIRE_UPPER_CASE";
const ALLOW_WHITE_SPACE_VAR: &str = "PWD_POLICY_ALLOW_WHITE_SPACE";
const SPECIAL_CHARACTERS_VAR: &str = "PWD_POLICY_SPECIAL_CHARACTERS";

/// Builds a policy from environment variables.
///
/// Unset variables keep their permissive defaults, so deployments only set
/// the rules they enforce.
///
/// # Environment Variables
///
/// - `PWD_POLICY_MIN_LENGTH`, `PWD_POLICY_MAX_LENGTH`: integers
/// - `PWD_POLICY_REQUIRE_DIGIT`, `PWD_POLICY_REQUIRE_LOWER_CASE`,
///   `PWD_POLICY_REQUIRE_UPPER_CASE`, `PWD_POLICY_ALLOW_WHITE_SPACE`:
///   `true`/`false`/`1`/`0`
/// - `PWD_POLICY_SPECIAL_CHARACTERS`: taken verbatim
///
/// # Errors
///
/// Returns error if:
/// - a length variable is negative or not an integer
/// - a boolean variable is unparseable
/// - the resulting bounds fail policy validation
pub fn policy_from_env() -> Result<PolicySpec, PolicyError> {
    let mut builder = PolicyBuilder::new();

    if let Some(value) = read_var(MIN_LENGTH_VAR) {
        builder = builder.min_length(parse_length(
            MIN_LENGTH_VAR,
            &value,
            PolicyError::NegativeMinLength,
        )?);
    }

    if let Some(value) = read_var(MAX_LENGTH_VAR) {
        builder = builder.max_length(parse_length(
            MAX_LENGTH_VAR,
            &value,
            PolicyError::NegativeMaxLength,
        )?);
    }

    if let Some(value) = read_var(REQUIRE_DIGIT_VAR) {
        builder = builder.require_digit(parse_bool(REQUIRE_DIGIT_VAR, &value)?);
    }

    if let Some(value) = read_var(REQUIRE_LOWER_CASE_VAR) {
        builder = builder.require_lower_case(parse_bool(REQUIRE_LOWER_CASE_VAR, &value)?);
    }

    if let Some(value) = read_var(REQUIRE_UPPER_CASE_VAR) {
        builder = builder.require_upper_case(parse_bool(REQUIRE_UPPER_CASE_VAR, &value)?);
    }

    if let Some(value) = read_var(ALLOW_WHITE_SPACE_VAR) {
        builder = builder.allow_white_space(parse_bool(ALLOW_WHITE_SPACE_VAR, &value)?);
    }

    // Verbatim, not trimmed: padding is part of the configured value and
    // membership trimming happens at policy construction.
    if let Ok(value) = std::env::var(SPECIAL_CHARACTERS_VAR) {
        builder = builder.special_characters(value);
    }

    builder.build()
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

// Lengths parse as signed so a configured negative is reported as such
// instead of as a parse failure.
fn parse_length(
    var: &'static str,
    value: &str,
    negative: PolicyError,
) -> Result<usize, PolicyError> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|source| PolicyError::InvalidInteger { var, source })?;
    if parsed < 0 {
        #[cfg(feature = "tracing")]
        tracing::error!("Policy rejected: {} is negative ({})", var, parsed);
        return Err(negative);
    }
    Ok(parsed as usize)
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, PolicyError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(PolicyError::InvalidBoolean { var }),
    }
}
