//! Error types for card-code parsing.

use thiserror::Error;

/// Errors that can occur while parsing a compact card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card code")]
    Empty,
    /// The color letter was not recognized.
    #[error("unrecognized color letter")]
    InvalidColor,
    /// The rank character was not recognized.
    #[error("unrecognized rank character")]
    InvalidRank,
    /// Extra characters followed a complete card code.
    #[error("trailing characters after card code")]
    TrailingInput,
}
