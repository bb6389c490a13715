use crate::domain::model::OperandLabel;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcdError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid {label} number '{input}': {source}")]
    ParseError {
        label: OperandLabel,
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("The {label} number is not valid UTF-8 text: {source}")]
    InvalidEncoding {
        label: OperandLabel,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("No value entered for the {label} number")]
    EmptyInput { label: OperandLabel },

    #[error("Input ended before the {label} number was read")]
    UnexpectedEof { label: OperandLabel },

    #[error("Validation error for '{field}' = '{value}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    System,
}

impl GcdError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GcdError::ParseError { .. }
            | GcdError::InvalidEncoding { .. }
            | GcdError::EmptyInput { .. }
            | GcdError::UnexpectedEof { .. } => ErrorCategory::Input,
            GcdError::ValidationError { .. } => ErrorCategory::Config,
            GcdError::IoError(_) | GcdError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GcdError::ParseError { label, input, .. } => {
                format!("'{}' is not a valid integer for the {} number", input, label)
            }
            GcdError::InvalidEncoding { label, .. } => {
                format!("The {} number contains characters that are not text", label)
            }
            GcdError::EmptyInput { label } => format!("The {} number was left empty", label),
            GcdError::UnexpectedEof { label } => {
                format!("Input closed before the {} number was entered", label)
            }
            GcdError::ValidationError { field, reason, .. } => {
                format!("Invalid option {}: {}", field, reason)
            }
            GcdError::IoError(e) => format!("Could not access the console: {}", e),
            GcdError::SerializationError(e) => format!("Could not format the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Enter a whole number such as 12 or -4, within the 64-bit signed range"
            }
            ErrorCategory::Config => "Run with --help to see the accepted options",
            ErrorCategory::System => "Check that stdin and stdout are connected and writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, GcdError>;
