use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathwayError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("TSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to fetch gene set library '{library}': {message}")]
    LibraryFetch { library: String, message: String },

    #[error("Input error: {message}")]
    InputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
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

impl PathwayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PathwayError::HttpError(_) | PathwayError::LibraryFetch { .. } => {
                ErrorCategory::Network
            }
            PathwayError::CsvError(_)
            | PathwayError::SerializationError(_)
            | PathwayError::InputError { .. } => ErrorCategory::Data,
            PathwayError::ConfigError { .. } | PathwayError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PathwayError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PathwayError::HttpError(_) | PathwayError::LibraryFetch { .. } => {
                "Check your internet connection and that the library name is one of the \
                 available libraries reported by the source."
                    .to_string()
            }
            PathwayError::InputError { .. } => {
                "Provide genes with --genes A,B,C or --genes-file <path>".to_string()
            }
            PathwayError::ConfigError { .. } | PathwayError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the config file".to_string()
            }
            PathwayError::CsvError(_) | PathwayError::SerializationError(_) => {
                "Output could not be encoded; rerun with --verbose for details".to_string()
            }
            PathwayError::IoError(_) => {
                "Check that the paths exist and are writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PathwayError::LibraryFetch { library, .. } => {
                format!("Could not download gene set library '{}'", library)
            }
            PathwayError::HttpError(_) => "Network request to the library server failed".to_string(),
            PathwayError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting for {}: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PathwayError>;
