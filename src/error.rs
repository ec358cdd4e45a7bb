use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No generative service credential configured")]
    MissingCredential,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Service response contained no text")]
    EmptyResponse,

    #[error("No JSON object found in service response")]
    NoJsonFound,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code used in structured log fields
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::MissingCredential => "MISSING_CREDENTIAL",
            PlannerError::Transport(_) => "TRANSPORT_ERROR",
            PlannerError::Service { .. } => "SERVICE_ERROR",
            PlannerError::EmptyResponse => "EMPTY_RESPONSE",
            PlannerError::NoJsonFound => "NO_JSON_FOUND",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::SchemaMismatch(_) => "SCHEMA_MISMATCH",
        }
    }

    /// Whether the failure came from the service response rather than the transport
    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            PlannerError::EmptyResponse
                | PlannerError::NoJsonFound
                | PlannerError::Serialization(_)
                | PlannerError::SchemaMismatch(_)
        )
    }
}
