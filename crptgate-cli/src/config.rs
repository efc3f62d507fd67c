//! Command-line configuration
//!
//! Settings come from CLI arguments, then environment variables with the
//! CRPTGATE_ prefix, then defaults.
//!
//! # Example Usage
//!
//! ```bash
//! # Two submissions per second
//! crptgate --request-limit 2 --window-secs 1 doc-1.json doc-2.json doc-3.json
//!
//! # Same, configured through the environment
//! export CRPTGATE_REQUEST_LIMIT=2
//! crptgate doc-1.json doc-2.json doc-3.json
//! ```

use anyhow::{Result, anyhow};
use clap::Parser;
use crptgate_client::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Validated configuration for one run
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Limiter settings
    pub limiter: LimiterConfig,
    /// API base address
    pub base_url: String,
    /// Signature passed along with every submission
    pub signature: String,
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Document files, submitted in order
    pub documents: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimiterConfig {
    /// Length of one window
    pub window: Duration,
    /// Submissions admitted per window
    pub request_limit: u64,
}

/// Command-line arguments
///
/// Every option can also be set through a CRPTGATE_ environment variable.
#[derive(Parser, Debug)]
#[command(
    name = "crptgate",
    about = "Submit documents to the registration endpoint under a request limit",
    long_about = "Submit documents to the registration endpoint under a request limit.\n\nEach FILE holds one JSON document. Submissions beyond the limit of the current window are skipped, not retried.\n\nEnvironment variables with CRPTGATE_ prefix are supported. CLI arguments take precedence over environment variables."
)]
pub struct Args {
    #[arg(
        long,
        value_name = "SECS",
        help = "Window length in seconds",
        default_value_t = 1,
        env = "CRPTGATE_WINDOW_SECS"
    )]
    pub window_secs: u64,
    #[arg(
        long,
        value_name = "N",
        help = "Submissions allowed per window",
        default_value_t = 10,
        env = "CRPTGATE_REQUEST_LIMIT"
    )]
    pub request_limit: u64,
    #[arg(
        long,
        value_name = "URL",
        help = "API base address",
        default_value = DEFAULT_BASE_URL,
        env = "CRPTGATE_BASE_URL"
    )]
    pub base_url: String,
    #[arg(
        long,
        value_name = "SIGNATURE",
        help = "Document signature",
        default_value = "",
        env = "CRPTGATE_SIGNATURE"
    )]
    pub signature: String,
    #[arg(
        long,
        value_name = "LEVEL",
        help = "Log level: error, warn, info, debug, trace",
        default_value = "info",
        env = "CRPTGATE_LOG_LEVEL"
    )]
    pub log_level: String,

    #[arg(
        long,
        help = "List all environment variables and exit",
        action = clap::ArgAction::SetTrue
    )]
    pub list_env_vars: bool,

    #[arg(value_name = "FILE", help = "Document JSON files")]
    pub documents: Vec<PathBuf>,
}

impl Config {
    /// Build configuration from environment variables and CLI arguments
    pub fn from_env_and_args() -> Result<Self> {
        let args = Args::parse();

        if args.list_env_vars {
            Self::print_env_vars();
            std::process::exit(0);
        }

        Self::from_args(args)
    }

    /// Build and validate configuration from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the window is zero or no document is given.
    pub fn from_args(args: Args) -> Result<Self> {
        let config = Config {
            limiter: LimiterConfig {
                window: Duration::from_secs(args.window_secs),
                request_limit: args.request_limit,
            },
            base_url: args.base_url,
            signature: args.signature,
            log_level: args.log_level,
            documents: args.documents,
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.limiter.window.is_zero() {
            return Err(anyhow!("--window-secs must be greater than zero"));
        }

        if self.documents.is_empty() {
            return Err(anyhow!(
                "At least one document file must be specified.\n\n\
                Example:\n  \
                crptgate --request-limit 5 doc-1.json doc-2.json\n\n\
                For more information, try '--help'"
            ));
        }

        Ok(())
    }

    fn print_env_vars() {
        println!("crptgate Environment Variables");
        println!("==============================");
        println!();
        println!("All environment variables use the CRPTGATE_ prefix.");
        println!("CLI arguments take precedence over environment variables.");
        println!();

        println!("Limiter Configuration:");
        println!("  CRPTGATE_WINDOW_SECS=<secs>      Window length in seconds [default: 1]");
        println!("  CRPTGATE_REQUEST_LIMIT=<n>       Submissions per window [default: 10]");
        println!();

        println!("Endpoint Configuration:");
        println!("  CRPTGATE_BASE_URL=<url>          API base address [default: {DEFAULT_BASE_URL}]");
        println!("  CRPTGATE_SIGNATURE=<signature>   Document signature [default: empty]");
        println!();

        println!("General Configuration:");
        println!(
            "  CRPTGATE_LOG_LEVEL=<level>       Log level: error, warn, info, debug, trace [default: info]"
        );
    }
}
