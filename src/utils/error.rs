use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Resource is not valid UTF-8: {path}")]
    Decode {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EmbedError>;

impl EmbedError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            EmbedError::NotFound { path } => {
                format!("Asset file not found: {}", path)
            }
            EmbedError::Decode { path, .. } => {
                format!("Asset file is not valid UTF-8 text: {}", path)
            }
            EmbedError::IoError(e) => format!("File operation failed: {}", e),
            EmbedError::ConfigValidationError { field, message } => {
                format!("Configuration problem ({}): {}", field, message)
            }
            EmbedError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid value '{}' for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EmbedError::NotFound { .. } => {
                "Check that index.html, style.css and app.js exist in the assets directory"
            }
            EmbedError::Decode { .. } => "Re-save the asset file with UTF-8 encoding",
            EmbedError::IoError(_) => "Check file permissions and available disk space",
            EmbedError::ConfigValidationError { .. }
            | EmbedError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }
}
