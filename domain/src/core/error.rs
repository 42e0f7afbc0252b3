//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_difficulty_display() {
        let error = DomainError::InvalidDifficulty("extreme".to_string());
        assert_eq!(error.to_string(), "Invalid difficulty: extreme");
    }
}
