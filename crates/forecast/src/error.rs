//! Error types for the kronos-forecast crate.

/// Error type for all fallible operations in the kronos-forecast crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ForecastError {
    /// Returned when `predict` is called before a successful `fit`.
    #[error("forecaster has not been fitted")]
    NotFitted,

    /// Returned when the training series is constant (zero variance).
    #[error("training series is constant (zero variance)")]
    ConstantData,

    /// Returned when the training series is too short for the model.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when a forecast horizon is structurally invalid.
    #[error("invalid horizon: {reason}")]
    InvalidHorizon {
        /// Description of the violated constraint.
        reason: String,
    },
}
