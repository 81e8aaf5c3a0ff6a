use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatusError { url: String, status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Feed document must be a JSON object, found {found}")]
    NotAnObjectError { found: &'static str },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Document,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FeedError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FeedError::IoError(_)
            | FeedError::HttpError(_)
            | FeedError::HttpStatusError { .. } => ErrorCategory::Transport,
            FeedError::SerializationError(_) | FeedError::NotAnObjectError { .. } => {
                ErrorCategory::Document
            }
            FeedError::ConfigError { .. }
            | FeedError::ConfigValidationError { .. }
            | FeedError::InvalidConfigValueError { .. }
            | FeedError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 伺服器端錯誤，可稍後重試
            FeedError::HttpError(_) => ErrorSeverity::Medium,
            FeedError::HttpStatusError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            FeedError::HttpStatusError { .. } => ErrorSeverity::High,
            FeedError::SerializationError(_) | FeedError::NotAnObjectError { .. } => {
                ErrorSeverity::High
            }
            FeedError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FeedError::IoError(_) => "Check that the file exists and is readable",
            FeedError::HttpError(_) => "Check network connectivity and retry",
            FeedError::HttpStatusError { .. } => "Check the feed URL and server availability",
            FeedError::SerializationError(_) => "Make sure the document is valid JSON",
            FeedError::NotAnObjectError { .. } => {
                "An OPDS feed must be a JSON object with metadata and links"
            }
            FeedError::ConfigError { .. }
            | FeedError::ConfigValidationError { .. }
            | FeedError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            FeedError::MissingConfigError { .. } => {
                "Pass the missing option on the command line or in the TOML file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Transport => format!("Could not read the feed: {}", self),
            ErrorCategory::Document => format!("The feed could not be decoded: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
