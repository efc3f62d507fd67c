use crptgate::LimiterError;
use thiserror::Error;

/// Failure to encode a value into its wire form
#[derive(Error, Debug)]
#[error("Failed to encode {type_name} as JSON: {source}")]
pub struct SerializationError {
    pub type_name: &'static str,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by [`DocumentClient`](crate::DocumentClient)
///
/// A throttled submission is not an error; it comes back as `Ok(false)`.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error("Failed to make a call: {0}")]
    Transport(#[from] TransportError),

    #[error("Rate limiter setup failed: {0}")]
    Limiter(#[from] LimiterError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
