use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No query provided")]
    EmptyQuery,

    #[error("Topic classification failed: {0}")]
    ClassifyFailed(String),

    #[error("Invalid topic identified: \"{0}\"")]
    InvalidTopic(String),

    #[error("Content generation failed: {0}")]
    GenerateFailed(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Message shown to API clients. Causes stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "No query provided.",
            Self::ClassifyFailed(_) => "Error identifying topic.",
            Self::InvalidTopic(_) => "Unable to identify a valid topic for the provided query.",
            Self::GenerateFailed(_) => "Error generating content.",
            _ => "Internal server error.",
        }
    }

    /// True for errors caused by the caller's input rather than by the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyQuery | Self::InvalidTopic(_))
    }

    pub fn is_completion_error(&self) -> bool {
        matches!(self, Self::Completion(_))
    }
}
