//! Password policy evaluation library
//!
//! This library checks candidate passwords against a configurable policy
//! and reports every violated rule in a single pass, so callers can show
//! the complete correction list at once.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based result delivery with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! A policy can also come from `PWD_POLICY_*` variables via
//! [`policy_from_env`]: `PWD_POLICY_MIN_LENGTH`, `PWD_POLICY_MAX_LENGTH`,
//! `PWD_POLICY_REQUIRE_DIGIT`, `PWD_POLICY_REQUIRE_LOWER_CASE`,
//! `PWD_POLICY_REQUIRE_UPPER_CASE`, `PWD_POLICY_ALLOW_WHITE_SPACE`,
//! `PWD_POLICY_SPECIAL_CHARACTERS`.
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate_password, PolicySpec};
//! use secrecy::SecretString;
//!
//! // Build the policy once, validated eagerly
//! let spec = PolicySpec::builder()
//!     .min_length(8)
//!     .max_length(20)
//!     .require_digit(true)
//!     .require_upper_case(true)
//!     .special_characters("!@#$%")
//!     .build()
//!     .expect("valid policy");
//!
//! // Evaluate a candidate
//! let candidate = SecretString::new("Sup3rSecret!".to_string().into());
//! let evaluation = evaluate_password(&spec, Some(&candidate));
//!
//! assert!(evaluation.is_accepted());
//! ```

// Internal modules
mod config;
mod evaluation;
mod evaluator;
mod policy;
mod rules;

// Public API
pub use config::policy_from_env;
pub use evaluation::{PolicyEvaluation, Violation};
pub use evaluator::evaluate_password;
pub use policy::{PolicyBuilder, PolicyError, PolicySpec};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
