//! Cross-cutting error types for MindEase.
//!
//! Storage and configuration errors live in their own crates. A unified error
//! is deferred to `mind-cli` where everything converges into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by the core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A mood label outside the fixed set was supplied where a known mood is required.
    #[error("Unknown mood '{label}' (expected one of: {expected})")]
    InvalidMood { label: String, expected: String },

    /// Data failed validation (range, format).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::CoreError;

    #[test]
    fn messages_name_the_bad_input() {
        let err = CoreError::InvalidMood {
            label: "meh".to_string(),
            expected: "Happy, Sad".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown mood 'meh' (expected one of: Happy, Sad)"
        );

        let err = CoreError::Validation("cycles out of range".to_string());
        assert_eq!(err.to_string(), "Validation error: cycles out of range");
    }
}
