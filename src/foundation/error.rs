/// Convenience result type used across smoothgrad.
pub type GradientResult<T> = Result<T, GradientError>;

/// Top-level error taxonomy used by configuration and rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum GradientError {
    /// The curve shape parameter was zero, negative, or not finite.
    #[error("invalid shape parameter: slope factor must be finite and > 0, got {0}")]
    InvalidShapeParameter(f64),

    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GradientError {
    /// Build a [`GradientError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GradientError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
