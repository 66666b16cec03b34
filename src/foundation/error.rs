/// Result alias used across the crate.
pub type HypoResult<T> = Result<T, HypoError>;

/// Errors produced by the motion model and the layers built on it.
#[derive(thiserror::Error, Debug)]
pub enum HypoError {
    /// Ratio `n` was zero or not finite; the traced-point formula divides by `n / 2`.
    #[error("invalid ratio: {0} (must be finite and non-zero)")]
    InvalidRatio(f64),

    /// Rejected input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure while evaluating a timeline or sampling a curve.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// JSON encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HypoError {
    /// Build a [`HypoError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HypoError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`HypoError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for HypoError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
