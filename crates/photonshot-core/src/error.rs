//! Error taxonomy for the conversion engine.

use thiserror::Error;

/// Errors surfaced by the conversion entry points.
///
/// Both kinds are raised at the point of detection and propagate unmodified;
/// no partial output is returned on error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A target count could not be resolved from any source: no explicit
    /// count and neither `max_shots` nor `max_samples` configured.
    #[error("no sample count information available: pass an explicit count or set max_shots/max_samples")]
    MissingCountInformation,

    /// A count table held a strictly negative entry during normalization.
    #[error("a sample count must be positive (got {0})")]
    InvalidCount(i64),
}

/// Result alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert!(
            ConversionError::MissingCountInformation
                .to_string()
                .contains("max_shots")
        );
        assert_eq!(
            ConversionError::InvalidCount(-3).to_string(),
            "a sample count must be positive (got -3)"
        );
    }
}
