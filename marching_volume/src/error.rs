//! Error types for the marching volume
//!
//! Every failure in this crate is an input-validation failure, detected
//! before any vertex buffer is touched.

use std::fmt;

/// Result type for marching volume operations
pub type Result<T> = std::result::Result<T, Error>;

/// Marching volume errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Degenerate camera frame (field of view, aspect ratio, clip distances,
    /// or non-finite values). The frustum corners are undefined.
    InvalidFrame(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFrame(msg) => write!(f, "Invalid camera frame: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
