use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Store connection failed: {message}")]
    StoreConnectionError { message: String },

    #[error("Store unavailable: {message}")]
    StoreUnavailableError { message: String },

    #[error("Failed to persist order: {message}")]
    PersistenceError { message: String },

    #[error("Store operation '{operation}' timed out after {timeout_ms}ms")]
    StoreTimeoutError { operation: String, timeout_ms: u64 },

    #[error("Malformed form payload: {message}")]
    MalformedPayloadError { message: String },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

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

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Store,
    Request,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl OrderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            OrderError::StoreConnectionError { .. }
            | OrderError::StoreUnavailableError { .. }
            | OrderError::PersistenceError { .. }
            | OrderError::StoreTimeoutError { .. } => ErrorCategory::Store,
            OrderError::MalformedPayloadError { .. } | OrderError::MissingFieldError { .. } => {
                ErrorCategory::Request
            }
            OrderError::ConfigError { .. }
            | OrderError::ConfigValidationError { .. }
            | OrderError::InvalidConfigValueError { .. }
            | OrderError::MissingConfigError { .. } => ErrorCategory::Configuration,
            OrderError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OrderError::MalformedPayloadError { .. } | OrderError::MissingFieldError { .. } => {
                ErrorSeverity::Low
            }
            OrderError::StoreUnavailableError { .. } | OrderError::StoreTimeoutError { .. } => {
                ErrorSeverity::Medium
            }
            OrderError::PersistenceError { .. }
            | OrderError::ConfigError { .. }
            | OrderError::ConfigValidationError { .. }
            | OrderError::InvalidConfigValueError { .. }
            | OrderError::MissingConfigError { .. } => ErrorSeverity::High,
            OrderError::StoreConnectionError { .. } | OrderError::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            OrderError::StoreConnectionError { .. } => {
                "Check that MongoDB is running and the --mongo-uri value is reachable".to_string()
            }
            OrderError::StoreUnavailableError { .. } | OrderError::StoreTimeoutError { .. } => {
                "Retry shortly; if it persists check the MongoDB server health".to_string()
            }
            OrderError::PersistenceError { .. } => {
                "Check MongoDB write permissions and free disk space".to_string()
            }
            OrderError::MalformedPayloadError { .. } => {
                "Submit the order form as application/x-www-form-urlencoded".to_string()
            }
            OrderError::MissingFieldError { field } => {
                format!("Fill in the '{}' field and submit again", field)
            }
            OrderError::IoError(_) => "Check file paths and permissions".to_string(),
            OrderError::ConfigError { .. } | OrderError::ConfigValidationError { .. } => {
                "Review the configuration file syntax and values".to_string()
            }
            OrderError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            OrderError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderError::StoreConnectionError { .. } => "Could not connect to the order database".to_string(),
            OrderError::StoreUnavailableError { .. } => "Error retrieving customers".to_string(),
            OrderError::PersistenceError { .. } => "Error saving customer".to_string(),
            OrderError::StoreTimeoutError { .. } => "The order database did not respond in time".to_string(),
            OrderError::MalformedPayloadError { .. } => "Invalid form data".to_string(),
            OrderError::MissingFieldError { field } => format!("Missing required field: {}", field),
            OrderError::IoError(e) => format!("File system error: {}", e),
            OrderError::ConfigError { message } => format!("Configuration problem: {}", message),
            OrderError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            OrderError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for '{}': {}", field, reason)
            }
            OrderError::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
