//! Error types for the payroll tool service.
//!
//! Every failure that can reach a tool caller is a [`PayrollError`]. The
//! only error allowed to terminate the process is a missing engine
//! credential at startup.

use thiserror::Error;

/// The main error type for payroll calculation and simulation.
///
/// # Example
///
/// ```
/// use bordro_tools::error::PayrollError;
///
/// let error = PayrollError::NoResult { year: 2025, month: 3 };
/// assert_eq!(error.to_string(), "Engine returned no result for period 2025-03");
/// assert_eq!(error.code(), "NO_RESULT");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The engine credential is not configured.
    #[error("Missing required environment variable: {variable}")]
    MissingCredential {
        /// The environment variable that was expected.
        variable: String,
    },

    /// The settings file could not be read or parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Tool input was rejected before any engine call was made.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// The engine answered without a payroll payload for a period.
    #[error("Engine returned no result for period {year}-{month:02}")]
    NoResult {
        /// Calendar year of the failed period.
        year: i32,
        /// Calendar month of the failed period.
        month: u32,
    },

    /// The engine rejected the request or failed on its side.
    #[error("Engine error (status {status}): {message}")]
    Engine {
        /// HTTP status reported by the engine, 0 when not applicable.
        status: u16,
        /// Body or description of the failure.
        message: String,
    },

    /// The engine could not be reached.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The tool call did not finish within the configured timeout.
    #[error("Request timed out after {seconds} seconds")]
    Timeout {
        /// The configured timeout.
        seconds: u64,
    },

    /// A result could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No tool is registered under the requested name.
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// The requested tool name.
        name: String,
    },
}

impl PayrollError {
    /// Shorthand for a [`PayrollError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } | Self::ConfigParseError { .. } => "CONFIG_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NoResult { .. } => "NO_RESULT",
            Self::Engine { .. } => "ENGINE_ERROR",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Timeout { .. } => "TIMEOUT",
            Self::Serialization(_) => "INTERNAL_ERROR",
            Self::UnknownTool { .. } => "UNKNOWN_TOOL",
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
