//! Error types for listserial.

use thiserror::Error;

/// Result type for listserial operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for listserial operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The OS device-enumeration facility could not be queried at all.
    ///
    /// Finding zero ports is not an error; this is reserved for the case
    /// where the platform subsystem itself is unreachable.
    #[error("Failed to enumerate serial ports")]
    Enumeration(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Report serialization failed.
    #[cfg(feature = "serde")]
    #[error("Failed to serialize report")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Wrap any error (or message) as an enumeration failure.
    pub fn enumeration(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Enumeration(source.into())
    }
}

#[cfg(feature = "native")]
impl From<serialport::Error> for Error {
    fn from(err: serialport::Error) -> Self {
        Self::enumeration(err)
    }
}
