//! PhishSense Core - Main Entry Point
//!
//! Usage: phishsense-core <url> [html-file] [text-file]

use std::process::ExitCode;
use std::sync::Arc;

use phishsense_core::constants;
use phishsense_core::logic::features::PageContent;
use phishsense_core::logic::orchestrator::{OrchestratorConfig, RiskOrchestrator};
use phishsense_core::logic::store::ResultStore;

fn read_optional(path: Option<&String>) -> Result<String, String> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|e| format!("Cannot read {}: {}", p, e)),
        None => Ok(String::new()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(url) = args.first() else {
        eprintln!("Usage: phishsense-core <url> [html-file] [text-file]");
        return ExitCode::from(2);
    };

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    let content = match (read_optional(args.get(1)), read_optional(args.get(2))) {
        (Ok(html), Ok(text)) => PageContent::new(html, text),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let store = match ResultStore::open_default() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Failed to open result store: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let orchestrator = RiskOrchestrator::new(store, OrchestratorConfig::default());
    let status = orchestrator.evaluate(url, &content).await;

    match serde_json::to_string_pretty(&status) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
    }
}
