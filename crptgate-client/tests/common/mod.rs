#![allow(dead_code)]

use chrono::NaiveDate;
use crptgate_client::{
    Description, Document, DocumentType, Product, ProductionType, Transport, TransportError,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Route client logs to the test harness; `RUST_LOG` overrides the level
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("crptgate_client=debug"));

    // Every test calls this; only the first install wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_document() -> Document {
    Document {
        description: Description {
            participant_inn: "7700000000".to_string(),
        },
        doc_id: "doc-1".to_string(),
        doc_status: "NEW".to_string(),
        doc_type: DocumentType::LpIntroduceGoods,
        import_request: false,
        owner_inn: "7700000001".to_string(),
        participant_inn: "7700000000".to_string(),
        producer_inn: "7700000002".to_string(),
        production_date: date(2023, 12, 31),
        production_type: ProductionType::String,
        products: vec![Product {
            certificate_document: "CONFORMITY_CERTIFICATE".to_string(),
            certificate_document_date: date(2023, 12, 5),
            certificate_document_number: "RU-123".to_string(),
            owner_inn: "7700000001".to_string(),
            producer_inn: "7700000002".to_string(),
            production_date: date(2023, 11, 30),
            tnved_code: "6403".to_string(),
            uit_code: "010460".to_string(),
            uitu_code: "146000".to_string(),
        }],
        reg_date: date(2024, 1, 1),
        reg_number: "42".to_string(),
    }
}

/// Transport stub that answers every request with a fixed status
pub struct RecordingTransport {
    status: u16,
    requests: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingTransport {
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<(String, Vec<u8>)> {
        self.requests.lock().clone()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, url: &str, body: Vec<u8>) -> Result<u16, TransportError> {
        self.requests.lock().push((url.to_string(), body));
        Ok(self.status)
    }
}

/// Transport stub that fails every request with an I/O error
#[derive(Default)]
pub struct FailingTransport {
    calls: AtomicUsize,
}

impl FailingTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for FailingTransport {
    fn send(&self, _url: &str, _body: Vec<u8>) -> Result<u16, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset").into())
    }
}
