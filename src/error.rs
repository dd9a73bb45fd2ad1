//! Error types for the tip pool engine.
//!
//! The calculation pipeline itself cannot fail. These errors cover the
//! surfaces around it: service configuration and validation of incoming
//! shift data.

use thiserror::Error;

/// The main error type for the tip pool engine.
///
/// # Example
///
/// ```
/// use tip_pool_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A numeric field in the shift input was negative or not finite.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// Dotted path of the offending field (e.g. `servers[2].sales`).
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An event record cannot be paid out as submitted.
    #[error("Invalid event '{event}': {message}")]
    InvalidEvent {
        /// The name of the event.
        event: String,
        /// A description of what made the event invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/service.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/service.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "servers[0].sales".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'servers[0].sales': must not be negative"
        );
    }

    #[test]
    fn test_invalid_event_displays_name_and_message() {
        let error = EngineError::InvalidEvent {
            event: "Wedding".to_string(),
            message: "split_by must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid event 'Wedding': split_by must be at least 1"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidInput {
                field: "bar_team.sales".to_string(),
                message: "must be finite".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
