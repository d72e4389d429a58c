/// Convenience result type used across Perspective.
pub type PerspectiveResult<T> = Result<T, PerspectiveError>;

/// Top-level error taxonomy used by library APIs.
///
/// Renderers never return errors from `record`/`render`; these variants cover construction
/// parameters and the ingestion side (binary logs, CSV input, classifier configuration).
#[derive(thiserror::Error, Debug)]
pub enum PerspectiveError {
    /// Invalid user-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed binary log or CSV input.
    #[error("decode error: {0}")]
    Decode(String),

    /// Unusable error-reason classifier configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PerspectiveError {
    /// Build a [`PerspectiveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PerspectiveError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PerspectiveError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PerspectiveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
