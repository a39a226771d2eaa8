//! Error types for the crc-sim system.
//!
//! All operations return structured errors rather than panicking.
//! Malformed input is a caller mistake, not a transient condition, so every
//! error here is local, synchronous, and non-retryable: the engine fails
//! fast and never proceeds on partial data.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Polynomial: generator polynomial parsing failures
/// - Division: degenerate or malformed division inputs
/// - I/O: reading payloads from stdin or files
#[derive(Debug, Error)]
pub enum Error {
    /// Generator polynomial could not be parsed
    #[error("polynomial error: {0}")]
    Polynomial(#[from] PolynomialError),

    /// Division engine received degenerate input
    #[error("division error: {0}")]
    Division(#[from] DivisionError),

    /// File or stdin I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Generator polynomial parsing errors.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// An `x^` term whose exponent is missing or not a non-negative integer
    #[error("invalid exponent {token:?}: expected a non-negative integer after '^'")]
    InvalidExponent { token: String },

    /// No terms recognized (the zero polynomial is not a valid generator)
    #[error("empty polynomial: no terms recognized")]
    Empty,
}

/// Binary division errors.
#[derive(Debug, Error)]
pub enum DivisionError {
    /// Data bit sequence is empty
    #[error("empty data: nothing to divide")]
    EmptyData,

    /// Generator word is shorter than 2 bits (degree 0 cannot produce a checksum)
    #[error("degenerate generator: {length} bit(s), need at least 2")]
    DegenerateGenerator { length: usize },

    /// A bit string contained something other than '0' or '1'
    #[error("non-binary character {found:?} at position {position}")]
    NonBinary { found: char, position: usize },

    /// Extended frame is shorter than the generator word
    #[error("frame too short: need at least {required} bits, got {actual}")]
    FrameTooShort { required: usize, actual: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
