//! Document model submitted to the registration endpoint
//!
//! Field names follow Rust conventions; the serde attributes carry the wire
//! keys the endpoint expects. Dates are calendar dates written as
//! `yyyy-MM-dd` strings.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "description": { "participantInn": "7700000000" },
//!   "doc_id": "doc-1",
//!   "doc_status": "NEW",
//!   "doc_type": "LP_INTRODUCE_GOODS",
//!   "importRequest": false,
//!   "owner_inn": "7700000001",
//!   "participant_inn": "7700000000",
//!   "producer_inn": "7700000002",
//!   "production_date": "2024-01-01",
//!   "production_type": "STRING",
//!   "products": [],
//!   "reg_date": "2024-01-01",
//!   "reg_number": "42"
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Participant the document is filed for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

/// Kind of document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    /// Introduction of goods into circulation
    #[serde(rename = "LP_INTRODUCE_GOODS")]
    LpIntroduceGoods,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionType {
    #[serde(rename = "STRING")]
    String,
}

/// A single line item of a [`Document`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub certificate_document: String,
    #[serde(with = "wire_date")]
    pub certificate_document_date: NaiveDate,
    pub certificate_document_number: String,
    pub owner_inn: String,
    pub producer_inn: String,
    #[serde(with = "wire_date")]
    pub production_date: NaiveDate,
    /// Commodity classification code
    pub tnved_code: String,
    /// Unit identifier of a single item
    pub uit_code: String,
    /// Unit identifier of an aggregated package
    pub uitu_code: String,
}

/// The submission payload
///
/// Field declaration order is the order keys appear on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub description: Description,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: DocumentType,
    #[serde(rename = "importRequest")]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    #[serde(with = "wire_date")]
    pub production_date: NaiveDate,
    pub production_type: ProductionType,
    pub products: Vec<Product>,
    #[serde(with = "wire_date")]
    pub reg_date: NaiveDate,
    pub reg_number: String,
}

/// `yyyy-MM-dd` encoding for calendar dates
mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub(super) fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(D::Error::custom)
    }
}
