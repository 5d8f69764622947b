//! Policy definition module
//!
//! Handles building and validating the immutable password policy.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("minLength cannot be negative")]
    NegativeMinLength,
    #[error("maxLength cannot be negative")]
    NegativeMaxLength,
    #[error("maxLength cannot be less than minLength")]
    MaxLengthLessThanMinLength,
    #[error("invalid integer in {var}")]
    InvalidInteger {
        var: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("invalid boolean in {var}")]
    InvalidBoolean { var: &'static str },
}

/// An immutable password policy.
///
/// Built once, validated eagerly, then shared freely: evaluation never
/// mutates a policy, so a single instance can back concurrent checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySpec {
    min_length: usize,
    max_length: usize,
    require_digit: bool,
    require_lower_case: bool,
    require_upper_case: bool,
    allow_white_space: bool,
    special_characters: String,
    // Trimmed membership set, computed once so evaluation never re-trims.
    special_set: Vec<char>,
}

impl PolicySpec {
    /// Builds a policy from the full parameter list.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::MaxLengthLessThanMinLength`] when the bounds
    /// are inverted. An invalid policy value is never produced.
    pub fn new(
        min_length: usize,
        max_length: usize,
        require_digit: bool,
        require_lower_case: bool,
        require_upper_case: bool,
        allow_white_space: bool,
        special_characters: impl Into<String>,
    ) -> Result<Self, PolicyError> {
        if max_length < min_length {
            #[cfg(feature = "tracing")]
            tracing::error!(
                "Policy rejected: maxLength {} is less than minLength {}",
                max_length,
                min_length
            );
            return Err(PolicyError::MaxLengthLessThanMinLength);
        }

        let special_characters = special_characters.into();
        let special_set = special_characters.trim().chars().collect();

        Ok(Self {
            min_length,
            max_length,
            require_digit,
            require_lower_case,
            require_upper_case,
            allow_white_space,
            special_characters,
            special_set,
        })
    }

    /// Returns a builder preloaded with the permissive defaults.
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    /// Length the candidate must be higher or equal to.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Length the candidate must be lower or equal to.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// The candidate must contain a digit.
    pub fn require_digit(&self) -> bool {
        self.require_digit
    }

    /// The candidate must contain a lower case character.
    pub fn require_lower_case(&self) -> bool {
        self.require_lower_case
    }

    /// The candidate must contain an upper case character.
    pub fn require_upper_case(&self) -> bool {
        self.require_upper_case
    }

    /// The candidate may contain white space.
    pub fn allow_white_space(&self) -> bool {
        self.allow_white_space
    }

    /// The special characters as configured, untrimmed.
    pub fn special_characters(&self) -> &str {
        &self.special_characters
    }

    /// Trimmed special-character set; empty means the rule is disabled.
    pub(crate) fn special_set(&self) -> &[char] {
        &self.special_set
    }
}

impl Default for PolicySpec {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: usize::MAX,
            require_digit: false,
            require_lower_case: false,
            require_upper_case: false,
            allow_white_space: false,
            special_characters: String::new(),
            special_set: Vec::new(),
        }
    }
}

/// Builder for [`PolicySpec`].
///
/// Every parameter has a permissive default, so callers only name the rules
/// they want enforced.
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    min_length: usize,
    max_length: usize,
    require_digit: bool,
    require_lower_case: bool,
    require_upper_case: bool,
    allow_white_space: bool,
    special_characters: String,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: usize::MAX,
            require_digit: false,
            require_lower_case: false,
            require_upper_case: false,
            allow_white_space: false,
            special_characters: String::new(),
        }
    }
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = value;
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = value;
        self
    }

    pub fn require_digit(mut self, value: bool) -> Self {
        self.require_digit = value;
        self
    }

    pub fn require_lower_case(mut self, value: bool) -> Self {
        self.require_lower_case = value;
        self
    }

    pub fn require_upper_case(mut self, value: bool) -> Self {
        self.require_upper_case = value;
        self
    }

    pub fn allow_white_space(mut self, value: bool) -> Self {
        self.allow_white_space = value;
        self
    }

    pub fn special_characters(mut self, value: impl Into<String>) -> Self {
        self.special_characters = value.into();
        self
    }

    /// Validates the configured parameters and produces the policy.
    ///
    /// # Errors
    ///
    /// Same contract as [`PolicySpec::new`].
    pub fn build(self) -> Result<PolicySpec, PolicyError> {
        PolicySpec::new(
            self.min_length,
            self.max_length,
            self.require_digit,
            self.require_lower_case,
            self.require_upper_case,
            self.allow_white_space,
            self.special_characters,
        )
    }
}
