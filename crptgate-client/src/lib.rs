//! Rate-limited client for the document registration endpoint
//!
//! This crate submits [`Document`] records to a single `lk/documents/create`
//! endpoint. Every submission first asks a fixed-window [`RateLimiter`]; only
//! admitted submissions are serialized and sent over a blocking
//! [`Transport`].
//!
//! ```no_run
//! use crptgate_client::{Document, DocumentClient};
//! use std::time::Duration;
//!
//! # fn run(document: Document) -> crptgate_client::Result<()> {
//! let client = DocumentClient::new(Duration::from_secs(1), 10)?;
//!
//! if client.create_document(&document, "signature")? {
//!     println!("sent");
//! } else {
//!     println!("throttled, try again later");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`RateLimiter`]: crptgate::RateLimiter

pub mod client;
pub mod document;
pub mod error;
pub mod serializer;
pub mod transport;

pub use client::{ClientBuilder, DocumentClient, Submission};
pub use document::{Description, Document, DocumentType, Product, ProductionType};
pub use error::{ClientError, Result, SerializationError, TransportError};
pub use transport::{HttpTransport, Transport};

/// Base address of the registration API
pub const DEFAULT_BASE_URL: &str = "https://ismp.crpt.ru/api/v3/";

/// Path of the documents resource, relative to the base address
pub const DOCUMENTS_PATH: &str = "lk/documents/";

/// Action appended to [`DOCUMENTS_PATH`]
pub const CREATE_ACTION: &str = "create";
