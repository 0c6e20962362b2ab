use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Batch matcher for agricultural product data
#[derive(Parser, Debug)]
#[command(name = "agromatch")]
#[command(about = "Match user records against fertilizer and pesticide reference datasets", long_about = None)]
struct Args {
    /// Path to the JSON request document
    request: PathBuf,

    /// Path the JSON response document is written to
    response: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting agromatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Request document: {:?}", args.request);

    // An unreadable or malformed request still produces a response
    // document; the platform reads the envelope, not the exit status.
    let response = match read_request(&args.request) {
        Ok(request) => agromatch_api::run(&request),
        Err(e) => agromatch_api::Response::failure(format!("{e:#}")),
    };

    let body = serde_json::to_string_pretty(&response)?;
    fs::write(&args.response, body)
        .with_context(|| format!("failed to write {}", args.response.display()))?;
    info!("Response written to {:?}", args.response);

    Ok(())
}

fn read_request(path: &Path) -> anyhow::Result<agromatch_api::Request> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid request document {}", path.display()))
}
