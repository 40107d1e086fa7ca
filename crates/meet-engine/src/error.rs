//! Error types for availability computation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Interval bounds that enclose nothing, or are inverted.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// A query range the engine cannot compute against.
    #[error("invalid query range: {0}")]
    InvalidQuery(String),

    /// A zone identifier that is not in the IANA database.
    #[error("invalid time zone: {0}")]
    InvalidTimezone(String),

    /// A free/busy fetch failed. Fatal for the whole aggregate request.
    #[error("provider fetch failed for {owner}: {message}")]
    ProviderFetch { owner: String, message: String },
}

impl EngineError {
    /// Tag an error with the owner whose fetch raised it.
    pub(crate) fn for_owner(self, owner: &str) -> Self {
        match self {
            tagged @ EngineError::ProviderFetch { .. } => tagged,
            other => EngineError::ProviderFetch {
                owner: owner.to_string(),
                message: other.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
