use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum FormError {
    // Submission errors
    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    BindError {
        field: String,
        value: String,
        reason: String,
    },

    // Persistence errors
    #[error("Failed to write '{path}': {reason}")]
    WriteError {
        path: String,
        reason: String,
    },

    // Settings errors
    #[error("Settings file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        reason: String,
    },

    // Serializer errors
    #[error("Failed to serialize {content_type}: {reason}")]
    SerializeError {
        content_type: String,
        reason: String,
    },

    // Server errors
    #[error("Server error during {operation}: {reason}")]
    ServerError {
        operation: String,
        reason: String,
    },
}

impl FormError {
    pub fn bind_error(field: &str, value: &str, reason: &str) -> Self {
        Self::BindError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write_error(path: &str, reason: &str) -> Self {
        Self::WriteError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn serialize_error(content_type: &str, reason: &str) -> Self {
        Self::SerializeError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn server_error(operation: &str, reason: &str) -> Self {
        Self::ServerError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status reported to the form submitter.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BindError { .. } => 400,
            Self::WriteError { .. } => 500,
            Self::ConfigurationFileError { .. } => 500,
            Self::ParseError { .. } => 500,
            Self::SerializeError { .. } => 500,
            Self::ServerError { .. } => 500,
        }
    }

    pub fn is_bind_error(&self) -> bool {
        matches!(self, Self::BindError { .. })
    }

    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::WriteError { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::BindError { .. } => {
                format!("{}\n💡 Check the highlighted field and submit the form again", self)
            }
            Self::WriteError { .. } => {
                format!("{}\n💡 Check that the output directory exists and is writable", self)
            }
            Self::ConfigurationFileError { .. } => {
                format!("{}\n💡 Check file permissions and TOML syntax", self)
            }
            Self::ParseError { .. } => {
                format!("{}\n💡 Check the format and syntax of the input", self)
            }
            Self::SerializeError { .. } => {
                format!("{}\n💡 This is a bug in the config generator", self)
            }
            Self::ServerError { .. } => {
                format!("{}\n💡 Check that the address is valid and the port is free", self)
            }
        }
    }
}

/// Result type alias for form operations
pub type FormResult<T> = Result<T, FormError>;

impl From<serde_urlencoded::de::Error> for FormError {
    fn from(error: serde_urlencoded::de::Error) -> Self {
        FormError::BindError {
            field: "form".to_string(),
            value: String::new(),
            reason: error.to_string(),
        }
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for FormError {
    fn from(error: std::io::Error) -> Self {
        FormError::ServerError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for FormError {
    fn from(error: toml::de::Error) -> Self {
        FormError::ConfigurationFileError {
            path: "settings".to_string(),
            reason: error.to_string(),
        }
    }
}
