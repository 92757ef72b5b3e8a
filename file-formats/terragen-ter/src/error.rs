//! Error handling for TER parsing

use std::io;
use thiserror::Error;

/// Errors that can occur when working with TER files
#[derive(Debug, Error)]
pub enum TerError {
    /// An I/O error occurred, including short reads
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The 16-byte file signature did not match
    #[error("signature did not match")]
    SignatureMismatch,

    /// A chunk marker outside the documented set was found
    #[error("unexpected chunk '{0}'")]
    UnexpectedChunk(String),

    /// The three SCAL components were not all equal
    #[error("SCAL values are not all equal: {x}, {y}, {z}")]
    InconsistentScale {
        /// X step
        x: f32,
        /// Y step
        y: f32,
        /// Z step
        z: f32,
    },

    /// The common SCAL value was zero or negative
    #[error("SCAL value is not positive: {0}")]
    NonPositiveScale(f32),

    /// An ALTW chunk arrived before both dimensions were known
    #[error("ALTW found before dimensions")]
    MissingDimensions,

    /// A dimension does not fit the format's 16-bit fields
    #[error("terrain is too large for the Terragen format: {width}x{depth}")]
    TooLarge {
        /// Grid width
        width: u32,
        /// Grid depth
        depth: u32,
    },

    /// A dimension is zero
    #[error("empty region cannot be written to the Terragen format")]
    EmptyRegion,

    /// The upscale factor was zero
    #[error("scale factor must be a positive integer")]
    InvalidScaleFactor,

    /// Data validation failed
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Type alias for Results from TER operations
pub type Result<T> = std::result::Result<T, TerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = TerError::SignatureMismatch;
        assert_eq!(format!("{}", error), "signature did not match");

        let error = TerError::UnexpectedChunk("ABCD".to_string());
        assert_eq!(format!("{}", error), "unexpected chunk 'ABCD'");

        let error = TerError::TooLarge {
            width: 70000,
            depth: 128,
        };
        assert_eq!(
            format!("{}", error),
            "terrain is too large for the Terragen format: 70000x128"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected end of file");
        let error = TerError::from(io_error);
        assert!(matches!(error, TerError::Io(_)));
    }
}
