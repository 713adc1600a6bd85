use thiserror::Error;

/// Failures of a request to the data backend or the geocoding provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The server answered successfully but with no rows
    #[error("Empty response")]
    Empty,
}

/// Failures of the browser geolocation request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocateError {
    /// The browser has no geolocation capability
    #[error("Geolocation is not supported")]
    Unsupported,

    /// The user refused the permission prompt
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The device could not determine a position
    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),

    /// No position within the configured timeout
    #[error("Timeout: {0}")]
    Timeout(String),
}

impl LocateError {
    /// The message reported by the browser, if any.
    pub fn browser_message(&self) -> &str {
        match self {
            LocateError::Unsupported => "",
            LocateError::PermissionDenied(message)
            | LocateError::PositionUnavailable(message)
            | LocateError::Timeout(message) => message,
        }
    }
}

/// Type alias for Result with FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
