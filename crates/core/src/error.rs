//! Error types shared by the crates around the markup engine.
//!
//! Parsing and compiling markup never fails; these errors come from the
//! surrounding layers (reading input, addressing remote containers,
//! encoding requests).

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around markup processing.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read markup input.
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// The target object id cannot address a text container.
    #[error("Invalid target object id: {0:?}")]
    InvalidObjectId(String),

    /// Failed to encode requests for the document service.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
