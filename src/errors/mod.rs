use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VscanError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Input validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // Network/API errors
    TransportError {
        operation: String,
        url: Option<String>,
        reason: String,
    },
    HttpError {
        operation: String,
        status: u16,
        body: serde_json::Value,
    },
    ParseError {
        content_type: String,
        reason: String,
    },

    // Workflow stage errors
    SubmissionError {
        publisher: String,
        name: String,
        reason: String,
    },
    StatusError {
        analysis_id: String,
        reason: String,
    },
    FetchError {
        analysis_id: String,
        reason: String,
    },
    TimeoutError {
        analysis_id: String,
        waited_secs: u64,
        last_status: String,
    },
    WorkflowError {
        stage: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl VscanError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn transport_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::TransportError {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            reason: reason.to_string(),
        }
    }

    pub fn http_error(operation: &str, status: u16, body: serde_json::Value) -> Self {
        Self::HttpError {
            operation: operation.to_string(),
            status,
            body,
        }
    }

    pub fn submission_error(publisher: &str, name: &str, reason: &str) -> Self {
        Self::SubmissionError {
            publisher: publisher.to_string(),
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn status_error(analysis_id: &str, reason: &str) -> Self {
        Self::StatusError {
            analysis_id: analysis_id.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn fetch_error(analysis_id: &str, reason: &str) -> Self {
        Self::FetchError {
            analysis_id: analysis_id.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn timeout_error(analysis_id: &str, waited_secs: u64, last_status: &str) -> Self {
        Self::TimeoutError {
            analysis_id: analysis_id.to_string(),
            waited_secs,
            last_status: last_status.to_string(),
        }
    }

    pub fn workflow_error(stage: &str, reason: &str) -> Self {
        Self::WorkflowError {
            stage: stage.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::ConfigurationError { .. } => true,
            Self::ConfigurationFileError { .. } => true,
            Self::ValidationError { .. } => true,
            Self::TransportError { .. } => true,
            Self::HttpError { .. } => true,
            Self::SubmissionError { .. } => true,
            Self::StatusError { .. } => true,
            Self::FetchError { .. } => true,
            Self::TimeoutError { .. } => true,
            Self::WorkflowError { .. } => true,
            Self::ParseError { .. } => false,
            Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::WorkflowError { .. } => ErrorSeverity::High,
            Self::TransportError { .. } => ErrorSeverity::Medium,
            Self::HttpError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::SubmissionError { .. } => ErrorSeverity::Medium,
            Self::StatusError { .. } => ErrorSeverity::Medium,
            Self::FetchError { .. } => ErrorSeverity::Medium,
            Self::TimeoutError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::TransportError { operation, url, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            Self::HttpError { operation, status, body } => {
                format!("{} request failed with status {}: {}", operation, status, body)
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}\n💡 Check the format and syntax of the input", content_type, reason)
            }
            Self::SubmissionError { publisher, name, reason } => {
                format!("Failed to submit {}.{} for analysis: {}", publisher, name, reason)
            }
            Self::StatusError { analysis_id, reason } => {
                format!("Failed to read status of analysis {}: {}", analysis_id, reason)
            }
            Self::FetchError { analysis_id, reason } => {
                format!("Failed to fetch results of analysis {}: {}", analysis_id, reason)
            }
            Self::TimeoutError { analysis_id, waited_secs, last_status } => {
                format!(
                    "Analysis {} did not reach a terminal status within {}s (last status: {})\n💡 Raise max_wait_secs or re-poll later",
                    analysis_id, waited_secs, last_status
                )
            }
            Self::WorkflowError { stage, reason } => {
                format!("Analysis workflow failed during {}: {}", stage, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for VscanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for VscanError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for vscan operations
pub type VscanResult<T> = Result<T, VscanError>;

/// Error handler for consistent top-level error reporting
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &VscanError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for VscanError {
    fn from(error: std::io::Error) -> Self {
        VscanError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for VscanError {
    fn from(error: serde_json::Error) -> Self {
        VscanError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for VscanError {
    fn from(error: toml::de::Error) -> Self {
        VscanError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for VscanError {
    fn from(error: reqwest::Error) -> Self {
        VscanError::TransportError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            reason: error.to_string(),
        }
    }
}
