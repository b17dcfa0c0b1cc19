//! Error types for the shard-count plugin
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Upstream error code Kinesis returns when the named stream does not exist
pub const RESOURCE_NOT_FOUND_CODE: &str = "ResourceNotFoundException";

/// The main error type for the plugin
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("{field} is required")]
    MissingConfigField { field: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("no more pages available")]
    NoMorePages,

    #[error("operation cancelled")]
    Cancelled,

    // ============================================================================
    // Upstream API Errors
    // ============================================================================
    #[error("{}", format_api(code.as_deref(), message))]
    Api {
        /// Machine-readable error code reported by the service, if any
        code: Option<String>,
        message: String,
    },

    // ============================================================================
    // Metric Output Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Other(String),
}

fn format_api(code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) => format!("api error {code}: {message}"),
        None => format!("api error: {message}"),
    }
}

/// Upstream conditions the plugin knows how to recover from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamCondition {
    /// The named stream does not exist
    ResourceNotFound,
}

impl UpstreamCondition {
    /// Map a stable upstream error code to a local condition
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            RESOURCE_NOT_FOUND_CODE => Some(Self::ResourceNotFound),
            _ => None,
        }
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an upstream API error
    pub fn api(code: Option<&str>, message: impl Into<String>) -> Self {
        Self::Api {
            code: code.map(ToString::to_string),
            message: message.into(),
        }
    }

    /// Machine-readable upstream error code, looking through context wrappers
    pub fn error_code(&self) -> Option<&str> {
        match self.root_cause() {
            Error::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// The local condition this error maps to, if it is a known upstream one
    pub fn upstream_condition(&self) -> Option<UpstreamCondition> {
        self.error_code().and_then(UpstreamCondition::from_code)
    }

    /// Check if the upstream service reported the resource as missing
    pub fn is_resource_not_found(&self) -> bool {
        self.upstream_condition() == Some(UpstreamCondition::ResourceNotFound)
    }

    /// Check if this error came from a cancelled operation
    pub fn is_cancelled(&self) -> bool {
        matches!(self.root_cause(), Error::Cancelled)
    }

    /// The innermost error beneath any context wrappers
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Error::Context { source, .. } = current {
            current = source.as_ref();
        }
        current
    }
}

/// Result type alias for the plugin
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: message.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: f(),
            source: Box::new(e.into()),
        })
    }
}
