use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl BookingError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            BookingError::IoError(e) => format!("Could not read or write a file: {}", e),
            BookingError::ConfigError { message } => format!("Configuration problem: {}", message),
            BookingError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            BookingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            BookingError::CatalogError { message } => format!("Catalog is invalid: {}", message),
            BookingError::ServerError { message } => format!("Server could not run: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookingError::IoError(_) => "Check that the file exists and is readable",
            BookingError::ConfigError { .. }
            | BookingError::ConfigValidationError { .. }
            | BookingError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and restart"
            }
            BookingError::CatalogError { .. } => {
                "Make movie and showing ids unique and point every showing at an existing movie"
            }
            BookingError::ServerError { .. } => {
                "Check that the port is free and the host address is valid"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        let err = BookingError::CatalogError {
            message: "duplicate movie id 1".to_string(),
        };
        assert_eq!(err.to_string(), "Catalog error: duplicate movie id 1");
        assert!(err.user_friendly_message().contains("duplicate movie id 1"));
        assert!(err.recovery_suggestion().contains("unique"));
    }

    #[test]
    fn test_invalid_config_value_display() {
        let err = BookingError::InvalidConfigValueError {
            field: "server.port".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '0' for 'server.port': Value must be at least 1"
        );
    }
}
