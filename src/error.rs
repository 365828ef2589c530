/// Reasons a sample is rejected by `record`
///
/// Both variants are raised before anything is appended, so the recorder is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid sample; object must provide a coercion method")]
    MissingCoercion,

    #[error("unexpected {0} value")]
    UnsupportedValueType(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Metric state not initialized; call Metric::init first")]
    Uninitialized,
}

impl Error {
    /// True for failures caused by the sample itself rather than the recorder
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type for resource-metric operations
pub type Result<T> = std::result::Result<T, Error>;
