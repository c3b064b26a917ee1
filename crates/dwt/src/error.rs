//! Error types for the kronos-dwt crate.

use kronos_panel::PanelError;

/// Error type for all fallible operations in the kronos-dwt crate.
///
/// Configuration errors are detected before any computation begins;
/// shape errors surface from the panel format adapter unchanged.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DwtError {
    /// Returned when a negative decomposition level count is supplied.
    #[error("num_levels must be at least 0, got {got}")]
    NegativeLevels {
        /// The out-of-range value that was supplied.
        got: i64,
    },

    /// Returned when a level count cannot be parsed as an integer.
    #[error("num_levels must be an integer, got '{got}'")]
    LevelsNotInteger {
        /// The token that failed to parse.
        got: String,
    },

    /// Shape or representation failure from the panel layer.
    #[error(transparent)]
    Panel(#[from] PanelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_negative_levels() {
        let err = DwtError::NegativeLevels { got: -1 };
        assert_eq!(err.to_string(), "num_levels must be at least 0, got -1");
    }

    #[test]
    fn error_levels_not_integer() {
        let err = DwtError::LevelsNotInteger { got: "3.5".into() };
        assert_eq!(err.to_string(), "num_levels must be an integer, got '3.5'");
    }

    #[test]
    fn error_panel_transparent() {
        let err = DwtError::from(PanelError::EmptyPanel);
        assert_eq!(err.to_string(), "panel has no instances");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DwtError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DwtError>();
    }
}
