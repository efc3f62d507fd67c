//! JSON encoding of outgoing payloads
//!
//! Encoding is one-way and deterministic: the same value always produces the
//! same bytes, with keys in field declaration order.

use crate::document::Document;
use crate::error::SerializationError;
use serde::Serialize;

/// Encode a [`Document`] into the request body
pub fn encode(document: &Document) -> Result<Vec<u8>, SerializationError> {
    to_wire(document)
}

/// Encode any serializable value as compact JSON
///
/// On failure the error names the Rust type that could not be encoded.
pub fn to_wire<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(value).map_err(|source| SerializationError {
        type_name: std::any::type_name::<T>(),
        source,
    })
}
