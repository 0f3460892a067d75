use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for stringutils
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule(name.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors caused by a caller passing arguments the API forbids
    pub fn is_programming_error(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::UnknownRule(_))
    }

    /// Get a stable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(_) => "E_INVALID_ARGUMENT",
            Error::Validation(_) => "E_VALIDATION",
            Error::UnknownRule(_) => "E_UNKNOWN_RULE",
            Error::Config(_) => "E_CONFIG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::invalid_argument("x").error_code(),
            "E_INVALID_ARGUMENT"
        );
        assert_eq!(Error::validation("x").error_code(), "E_VALIDATION");
        assert_eq!(Error::unknown_rule("x").error_code(), "E_UNKNOWN_RULE");
        assert_eq!(Error::config("x").error_code(), "E_CONFIG");
    }

    #[test]
    fn test_programming_errors() {
        assert!(Error::invalid_argument("no elements").is_programming_error());
        assert!(Error::unknown_rule("isbn11").is_programming_error());
        assert!(!Error::validation("bad isbn").is_programming_error());
        assert!(!Error::config("bad file").is_programming_error());
    }
}
