mod common;

use common::{FailingTransport, RecordingTransport, sample_document};
use crptgate_client::{ClientBuilder, ClientError, Submission, TransportError};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_limit_then_reset() {
    common::init_tracing();
    let transport = Arc::new(RecordingTransport::with_status(200));
    let client = ClientBuilder::new()
        .window(Duration::from_secs(1))
        .request_limit(2)
        .build_with_transport(Arc::clone(&transport))
        .unwrap();
    let document = sample_document();

    assert!(client.create_document(&document, "sig").unwrap());
    assert!(client.create_document(&document, "sig").unwrap());
    assert!(!client.create_document(&document, "sig").unwrap());
    assert_eq!(client.limiter().resets(), 0, "c1..c3 must land in the first window");
    assert_eq!(transport.calls(), 2);

    // Wait for the window to roll over
    let deadline = Instant::now() + Duration::from_secs(5);
    while client.limiter().resets() == 0 {
        assert!(Instant::now() < deadline, "window never reset");
        thread::sleep(Duration::from_millis(5));
    }

    assert!(client.create_document(&document, "sig").unwrap());
    assert_eq!(transport.calls(), 3);
}

#[test]
fn test_zero_limit_never_sends() {
    common::init_tracing();
    let transport = Arc::new(RecordingTransport::with_status(200));
    let client = ClientBuilder::new()
        .request_limit(0)
        .build_with_transport(Arc::clone(&transport))
        .unwrap();
    let document = sample_document();

    for _ in 0..20 {
        assert!(!client.create_document(&document, "sig").unwrap());
    }
    assert_eq!(transport.calls(), 0);
}

#[test]
fn test_transport_failure_propagates() {
    common::init_tracing();
    let transport = Arc::new(FailingTransport::default());
    let client = ClientBuilder::new()
        .request_limit(5)
        .build_with_transport(Arc::clone(&transport))
        .unwrap();

    match client.create_document(&sample_document(), "sig") {
        Err(ClientError::Transport(TransportError::Io(e))) => {
            assert_eq!(e.kind(), std::io::ErrorKind::ConnectionReset);
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    assert_eq!(transport.calls(), 1);
}

#[test]
fn test_failed_attempt_still_counts() {
    common::init_tracing();
    let transport = Arc::new(FailingTransport::default());
    let client = ClientBuilder::new()
        .window(Duration::from_secs(60))
        .request_limit(1)
        .build_with_transport(Arc::clone(&transport))
        .unwrap();
    let document = sample_document();

    assert!(client.create_document(&document, "sig").is_err());
    assert!(!client.create_document(&document, "sig").unwrap());
    assert_eq!(transport.calls(), 1);
}

#[test]
fn test_non_success_status_counts_as_attempted() {
    common::init_tracing();
    let transport = Arc::new(RecordingTransport::with_status(503));
    let client = ClientBuilder::new()
        .build_with_transport(Arc::clone(&transport))
        .unwrap();

    assert!(client.create_document(&sample_document(), "sig").unwrap());
}

#[test]
fn test_submit_reports_status() {
    common::init_tracing();
    let transport = RecordingTransport::with_status(422);
    let client = ClientBuilder::new()
        .window(Duration::from_secs(60))
        .request_limit(1)
        .build_with_transport(transport)
        .unwrap();
    let document = sample_document();

    assert_eq!(
        client.submit(&document, "sig").unwrap(),
        Submission::Sent { status: 422 }
    );
    assert_eq!(client.submit(&document, "sig").unwrap(), Submission::Throttled);
}

#[test]
fn test_request_target_and_body() {
    common::init_tracing();
    let transport = Arc::new(RecordingTransport::with_status(200));
    let client = ClientBuilder::new()
        .base_url("http://localhost:9999/api/v3/")
        .build_with_transport(Arc::clone(&transport))
        .unwrap();

    client
        .create_document(&sample_document(), "very-secret-signature")
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);

    let (url, body) = &requests[0];
    assert_eq!(url, "http://localhost:9999/api/v3/lk/documents/create");

    let body = String::from_utf8(body.clone()).unwrap();
    assert!(body.contains(r#""reg_date":"2024-01-01""#));
    assert!(body.contains(r#""doc_type":"LP_INTRODUCE_GOODS""#));
    // The signature is never sent
    assert!(!body.contains("very-secret-signature"));
}

#[test]
fn test_default_target_url() {
    common::init_tracing();
    let client = ClientBuilder::new()
        .build_with_transport(RecordingTransport::with_status(200))
        .unwrap();
    assert_eq!(client.url(), "https://ismp.crpt.ru/api/v3/lk/documents/create");
}

#[test]
fn test_zero_window_fails_to_build() {
    common::init_tracing();
    let result = ClientBuilder::new()
        .window(Duration::ZERO)
        .build_with_transport(RecordingTransport::with_status(200));

    assert!(matches!(result, Err(ClientError::Limiter(_))));
}

#[test]
fn test_concurrent_submissions_admit_exactly_limit() {
    common::init_tracing();
    const LIMIT: u64 = 25;
    const THREADS: usize = 12;
    const ATTEMPTS: usize = 10;

    let transport = Arc::new(RecordingTransport::with_status(200));
    let client = Arc::new(
        ClientBuilder::new()
            .window(Duration::from_secs(60))
            .request_limit(LIMIT)
            .build_with_transport(Arc::clone(&transport))
            .unwrap(),
    );
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let client = Arc::clone(&client);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let document = sample_document();
                barrier.wait();
                (0..ATTEMPTS)
                    .filter(|_| client.create_document(&document, "sig").unwrap())
                    .count() as u64
            })
        })
        .collect();

    let accepted: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(accepted, LIMIT);
    assert_eq!(transport.calls() as u64, LIMIT);
}
