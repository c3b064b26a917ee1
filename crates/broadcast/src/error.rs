//! Error types for the kronos-broadcast crate.

use kronos_forecast::ForecastError;
use kronos_panel::PanelError;

/// Error type for all fallible operations in the kronos-broadcast crate.
///
/// A failed per-cell invocation fails the whole broadcast; the first
/// failing cell is identified for diagnosability.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BroadcastError {
    /// Returned when a wrapped estimator declares panel-shaped input;
    /// such an estimator needs no vectorization.
    #[error("estimator declares panel input; vectorization is not applicable")]
    PanelNativeEstimator,

    /// Returned when the estimator failed on one cell of the panel.
    #[error("estimator failed on instance {instance}, variable {variable}: {source}")]
    InstanceFailed {
        /// Instance index of the failing cell.
        instance: usize,
        /// Variable index of the failing cell.
        variable: usize,
        /// The originating estimator error.
        #[source]
        source: ForecastError,
    },

    /// Returned when a per-instance forecast length disagrees with the horizon.
    #[error("forecast length mismatch on instance {instance}: expected {expected}, got {got}")]
    HorizonMismatch {
        /// Instance index of the offending forecast.
        instance: usize,
        /// Requested horizon length.
        expected: usize,
        /// Length actually produced.
        got: usize,
    },

    /// Returned when reassembly produced a different instance count than
    /// the fitted input.
    #[error("instance count changed during broadcast: expected {expected}, got {got}")]
    InstanceCountMismatch {
        /// Instance count of the fitted input panel.
        expected: usize,
        /// Instance count of the reassembled output.
        got: usize,
    },

    /// Shape or representation failure from the panel layer.
    #[error(transparent)]
    Panel(#[from] PanelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_panel_native() {
        assert_eq!(
            BroadcastError::PanelNativeEstimator.to_string(),
            "estimator declares panel input; vectorization is not applicable"
        );
    }

    #[test]
    fn error_instance_failed_names_cell() {
        let err = BroadcastError::InstanceFailed {
            instance: 4,
            variable: 0,
            source: ForecastError::ConstantData,
        };
        assert_eq!(
            err.to_string(),
            "estimator failed on instance 4, variable 0: \
             training series is constant (zero variance)"
        );
    }

    #[test]
    fn error_horizon_mismatch() {
        let err = BroadcastError::HorizonMismatch {
            instance: 2,
            expected: 3,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "forecast length mismatch on instance 2: expected 3, got 1"
        );
    }

    #[test]
    fn error_instance_count_mismatch() {
        let err = BroadcastError::InstanceCountMismatch {
            expected: 10,
            got: 9,
        };
        assert_eq!(
            err.to_string(),
            "instance count changed during broadcast: expected 10, got 9"
        );
    }

    #[test]
    fn source_error_is_preserved() {
        use std::error::Error;
        let err = BroadcastError::InstanceFailed {
            instance: 0,
            variable: 0,
            source: ForecastError::NotFitted,
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<BroadcastError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<BroadcastError>();
    }
}
