mod config;

use anyhow::{Context, Result, anyhow};
use crptgate_client::{ClientBuilder, Document, Submission};
use std::path::Path;

use crate::config::Config;

const LOG_TARGETS: [&str; 2] = ["crptgate", "crptgate_client"];

fn main() -> Result<()> {
    // Parse configuration from environment variables and CLI arguments
    let config = Config::from_env_and_args()?;

    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for target in LOG_TARGETS {
        filter = filter.add_directive(format!("{target}={}", config.log_level).parse()?);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = ClientBuilder::new()
        .window(config.limiter.window)
        .request_limit(config.limiter.request_limit)
        .base_url(config.base_url.as_str())
        .build()?;

    tracing::info!(
        "Submitting {} document(s) to {} ({} per {:?})",
        config.documents.len(),
        client.url(),
        config.limiter.request_limit,
        config.limiter.window
    );

    let mut sent = 0usize;
    let mut throttled = 0usize;
    let mut failed = 0usize;

    for path in &config.documents {
        let document = match load_document(path) {
            Ok(document) => document,
            Err(e) => {
                tracing::error!("Skipping {}: {:#}", path.display(), e);
                failed += 1;
                continue;
            }
        };

        match client.submit(&document, &config.signature) {
            Ok(Submission::Sent { status }) => {
                tracing::info!("{}: sent, status {}", path.display(), status);
                sent += 1;
            }
            Ok(Submission::Throttled) => {
                tracing::warn!("{}: request limit reached, not sent", path.display());
                throttled += 1;
            }
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "Done: {} sent, {} throttled, {} failed",
        sent,
        throttled,
        failed
    );

    if failed > 0 {
        return Err(anyhow!("{failed} document(s) failed"));
    }

    Ok(())
}

fn load_document(path: &Path) -> Result<Document> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid document in {}", path.display()))
}
