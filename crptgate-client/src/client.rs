use std::time::Duration;

use crptgate::RateLimiter;

use crate::document::Document;
use crate::error::Result;
use crate::serializer;
use crate::transport::{HttpTransport, Transport};
use crate::{CREATE_ACTION, DEFAULT_BASE_URL, DOCUMENTS_PATH};

const DEFAULT_WINDOW: Duration = Duration::from_secs(1);
const DEFAULT_REQUEST_LIMIT: u64 = 10;

/// Outcome of a submission that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The limiter rejected the attempt; nothing was sent
    Throttled,
    /// A request went out and a response came back with this status
    Sent { status: u16 },
}

impl Submission {
    /// Whether a request was sent and answered, whatever the status
    pub fn is_attempted(&self) -> bool {
        matches!(self, Submission::Sent { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Submission::Sent { status } => Some(*status),
            Submission::Throttled => None,
        }
    }
}

/// Builder for creating a DocumentClient
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    window: Duration,
    request_limit: u64,
    base_url: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            request_limit: DEFAULT_REQUEST_LIMIT,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new client builder
    ///
    /// Defaults to 10 requests per 1 second window against the production
    /// API base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length of one limiter window
    pub fn window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Set how many submissions a window admits
    pub fn request_limit(mut self, limit: u64) -> Self {
        self.request_limit = limit;
        self
    }

    /// Set the API base address
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the client with the default HTTP transport
    pub fn build(self) -> Result<DocumentClient> {
        let transport = HttpTransport::new()?;
        self.build_with_transport(transport)
    }

    /// Build the client around the given transport
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<DocumentClient<T>> {
        let limiter = RateLimiter::new(self.window, self.request_limit)?;
        let url = create_url(&self.base_url);

        tracing::debug!(
            "Document client ready: {} requests per {:?} to {}",
            self.request_limit,
            self.window,
            url
        );

        Ok(DocumentClient {
            limiter,
            transport,
            url,
        })
    }
}

fn create_url(base_url: &str) -> String {
    let mut url = base_url.to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(DOCUMENTS_PATH);
    url.push_str(CREATE_ACTION);
    url
}

/// Rate-limited client for the document creation endpoint
///
/// One instance is meant to be shared by many producer threads; the limiter
/// is the only mutable state and is updated atomically.
#[derive(Debug)]
pub struct DocumentClient<T = HttpTransport> {
    limiter: RateLimiter,
    transport: T,
    url: String,
}

impl DocumentClient {
    /// Create a client admitting `request_limit` submissions per `window`
    pub fn new(window: Duration, request_limit: u64) -> Result<Self> {
        ClientBuilder::new()
            .window(window)
            .request_limit(request_limit)
            .build()
    }

    /// Create a new client builder for advanced configuration
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> DocumentClient<T> {
    /// Submit a document if the current window still has room
    ///
    /// Returns `Ok(false)` when throttled, `Ok(true)` once any response has
    /// been received. The status code does not affect the result; use
    /// [`submit`](Self::submit) to see it.
    ///
    /// `signature` is accepted but not attached to the request.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Serialization`](crate::ClientError::Serialization): the document could not be encoded
    /// - [`ClientError::Transport`](crate::ClientError::Transport): no response was received
    pub fn create_document(&self, document: &Document, signature: &str) -> Result<bool> {
        self.submit(document, signature)
            .map(|submission| submission.is_attempted())
    }

    /// Submit a document and report the status code that came back
    pub fn submit(&self, document: &Document, signature: &str) -> Result<Submission> {
        if !self.limiter.try_acquire() {
            tracing::info!(
                "Failed to make '/documents/create' call, cause request limit '{}'",
                self.limiter.limit()
            );
            return Ok(Submission::Throttled);
        }

        // TODO: attach the signature once the signing scheme for this endpoint is settled.
        tracing::debug!(
            "Submitting document '{}' ({} byte signature)",
            document.doc_id,
            signature.len()
        );

        let body = serializer::encode(document)?;

        let status = self.transport.send(&self.url, body).map_err(|e| {
            tracing::error!("Call to '/documents/create' failed: {}", e);
            e
        })?;

        if (200..300).contains(&status) {
            tracing::info!(
                "Received the response status code '{}' from '/documents/create' call",
                status
            );
        } else {
            tracing::warn!(
                "Received the non-success status code '{}' from '/documents/create' call",
                status
            );
        }

        Ok(Submission::Sent { status })
    }

    /// The limiter guarding this client
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL submissions are posted to
    pub fn url(&self) -> &str {
        &self.url
    }
}
