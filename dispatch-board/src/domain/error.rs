//! Domain validation errors.
//!
//! These errors represent rejected construction or mutation input on the
//! departure entity. Their messages are shown to the operator verbatim.

/// Validation failures for departure construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required time was not supplied
    #[error("time can not be null")]
    MissingTime,

    /// A required string field was empty or all-whitespace
    #[error("blank {0}")]
    BlankField(&'static str),

    /// A track number below zero was supplied
    #[error("track cant be less than 0")]
    NegativeTrack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MissingTime;
        assert_eq!(err.to_string(), "time can not be null");

        let err = ValidationError::BlankField("destination");
        assert_eq!(err.to_string(), "blank destination");

        let err = ValidationError::NegativeTrack;
        assert_eq!(err.to_string(), "track cant be less than 0");
    }
}
