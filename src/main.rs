//! Candidate Intake - demo entry point
//!
//! Reads one JSON candidate submission from the file named on the command
//! line (or stdin), stores it in an in-memory repository and prints the
//! persisted candidate as JSON.

use anyhow::{Context, Result};
use candidate_intake::{
    CandidateRepository, CandidateService, CandidateServiceImpl, CandidateSubmission, Config,
    InMemoryCandidateRepository,
};
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the JSON result
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        phone_length = config.phone_length,
        phone_prefixes = %config.phone_prefixes,
        "Configuration loaded"
    );

    let raw = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read submission from {}", path))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read submission from stdin")?;
            buf
        }
    };

    let submission: CandidateSubmission =
        serde_json::from_str(&raw).context("Submission is not valid JSON")?;

    let repository =
        Arc::new(InMemoryCandidateRepository::new()) as Arc<dyn CandidateRepository>;
    let service = CandidateServiceImpl::with_validator(repository, config.validator());

    match service.add_candidate(submission).await {
        Ok(candidate) => {
            println!("{}", serde_json::to_string_pretty(&candidate)?);
            Ok(())
        }
        Err(e) => {
            error!(client_error = e.is_client_error(), "Candidate rejected: {}", e);
            Err(e.into())
        }
    }
}
