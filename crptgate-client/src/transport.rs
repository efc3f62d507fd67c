//! Blocking request transport
//!
//! The client only needs one capability from the network: POST a JSON body to
//! a URL and learn the status code. [`Transport`] is that seam; the default
//! implementation, [`HttpTransport`], is backed by `reqwest`'s blocking
//! client.

use crate::error::TransportError;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;

/// Content type of every request body
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Sends a single request and reports the response status
///
/// Implementations block the calling thread for the whole round trip and do
/// not retry. Any response body must be released before `send` returns.
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with a JSON content type
    fn send(&self, url: &str, body: Vec<u8>) -> Result<u16, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, url: &str, body: Vec<u8>) -> Result<u16, TransportError> {
        (**self).send(url, body)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, url: &str, body: Vec<u8>) -> Result<u16, TransportError> {
        (**self).send(url, body)
    }
}

/// HTTP transport over `reqwest::blocking`
///
/// Uses the library's default timeouts and redirect policy.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured `reqwest` client
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, url: &str, body: Vec<u8>) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        // Release the connection and body before returning.
        drop(response);

        Ok(status)
    }
}
