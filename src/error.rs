//! Error types for abook

use thiserror::Error;

/// Field-level validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Invalid phone number: '{0}'. Phone numbers are exactly 10 digits")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

/// Main error type for abook application
#[derive(Debug, Error)]
pub enum AbookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    #[error("Command '{command}' expects {expected} argument(s)")]
    ArgumentCount { command: String, expected: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AbookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AbookError::Config(_) => 2,
            AbookError::TomlDeserialize(_) | AbookError::Validation(_) => 3,
            _ => 1,
        }
    }

    /// Get the fixed message shown to the user when a command fails
    pub fn user_message(&self) -> String {
        match self {
            AbookError::ArgumentCount { expected, .. } if *expected > 1 => {
                "Give me name and phone please.".to_string()
            }
            AbookError::ArgumentCount { .. } => "Enter the argument for the command.".to_string(),
            AbookError::ContactNotFound(_) => "Contact does not exist.".to_string(),
            AbookError::PhoneNotFound(_) => "Phone number not found.".to_string(),
            AbookError::Validation(ValidationError::EmptyName) => {
                "Name must not be empty.".to_string()
            }
            AbookError::Validation(ValidationError::InvalidPhone(_)) => {
                "Phone number must contain exactly 10 digits.".to_string()
            }
            AbookError::Validation(err @ ValidationError::InvalidBirthday(_)) => err.to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type using AbookError
pub type Result<T> = std::result::Result<T, AbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_messages() {
        let two = AbookError::ArgumentCount {
            command: "add".to_string(),
            expected: 2,
        };
        assert_eq!(two.user_message(), "Give me name and phone please.");

        let one = AbookError::ArgumentCount {
            command: "phone".to_string(),
            expected: 1,
        };
        assert_eq!(one.user_message(), "Enter the argument for the command.");
    }

    #[test]
    fn test_not_found_messages() {
        let err = AbookError::ContactNotFound("Ann".to_string());
        assert_eq!(err.user_message(), "Contact does not exist.");

        let err = AbookError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.user_message(), "Phone number not found.");
    }

    #[test]
    fn test_birthday_message_is_descriptive() {
        let err = AbookError::from(ValidationError::InvalidBirthday("2024-01-01".to_string()));
        assert_eq!(err.user_message(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_phone_message() {
        let err = AbookError::from(ValidationError::InvalidPhone("123".to_string()));
        assert_eq!(
            err.user_message(),
            "Phone number must contain exactly 10 digits."
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(AbookError::Config("bad".to_string()).exit_code(), 2);
        assert_eq!(
            AbookError::Io(std::io::Error::other("disk")).exit_code(),
            1
        );
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = AbookError::Config("Unknown interface".to_string());
        assert_eq!(err.user_message(), "Configuration error: Unknown interface");
    }
}
