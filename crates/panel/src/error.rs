//! Error types for the kronos-panel crate.

use crate::mtype::Mtype;

/// Error type for all fallible operations in the kronos-panel crate.
///
/// Covers series/panel validation failures and representation conversion
/// problems. All errors are detected eagerly at the component boundary;
/// no partial conversion output is ever produced.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PanelError {
    /// Returned when a series contains no observations.
    #[error("series is empty")]
    EmptySeries,

    /// Returned when input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a panel contains no instances.
    #[error("panel has no instances")]
    EmptyPanel,

    /// Returned when an instance contains no variables.
    #[error("panel instance has no variables")]
    NoVariables,

    /// Returned when instances disagree on the number of variables.
    #[error("instance {instance} has {got} variables, expected {expected}")]
    VariableCountMismatch {
        /// Index of the offending instance.
        instance: usize,
        /// Variable count declared by the first instance.
        expected: usize,
        /// Variable count found on this instance.
        got: usize,
    },

    /// Returned when a ragged panel is converted to a dense representation.
    #[error("unequal series lengths in variable {variable}: dense layout requires equal length")]
    RaggedPanel {
        /// Variable index where the length mismatch was detected.
        variable: usize,
    },

    /// Returned when a value does not carry the declared representation tag.
    #[error("expected mtype {expected}, found {found}")]
    WrongMtype {
        /// The declared representation tag.
        expected: Mtype,
        /// The tag the value actually carries.
        found: Mtype,
    },

    /// Returned when a long-format table cannot be assembled into a panel.
    #[error("malformed long table: {reason}")]
    MalformedLongTable {
        /// Human-readable description of the structural violation.
        reason: String,
    },

    /// Returned when a flat panel's dimensions are inconsistent.
    #[error("malformed flat panel: {reason}")]
    MalformedFlatPanel {
        /// Human-readable description of the structural violation.
        reason: String,
    },

    /// Returned when an unknown representation tag name is parsed.
    #[error("unknown mtype tag: {0}")]
    UnknownMtype(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_series() {
        assert_eq!(PanelError::EmptySeries.to_string(), "series is empty");
    }

    #[test]
    fn error_non_finite() {
        assert_eq!(
            PanelError::NonFiniteData.to_string(),
            "input data contains non-finite values"
        );
    }

    #[test]
    fn error_variable_count_mismatch() {
        let err = PanelError::VariableCountMismatch {
            instance: 3,
            expected: 2,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "instance 3 has 1 variables, expected 2"
        );
    }

    #[test]
    fn error_ragged_panel() {
        let err = PanelError::RaggedPanel { variable: 0 };
        assert_eq!(
            err.to_string(),
            "unequal series lengths in variable 0: dense layout requires equal length"
        );
    }

    #[test]
    fn error_wrong_mtype() {
        let err = PanelError::WrongMtype {
            expected: Mtype::Dense3d,
            found: Mtype::Nested,
        };
        assert_eq!(err.to_string(), "expected mtype dense3d, found nested");
    }

    #[test]
    fn error_malformed_long_table() {
        let err = PanelError::MalformedLongTable {
            reason: "instance indices not contiguous".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed long table: instance indices not contiguous"
        );
    }

    #[test]
    fn error_malformed_flat_panel() {
        let err = PanelError::MalformedFlatPanel {
            reason: "5 columns not divisible by 2 variables".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed flat panel: 5 columns not divisible by 2 variables"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<PanelError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PanelError>();
    }
}
