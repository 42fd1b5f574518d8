//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Environment overrides are read through the `get_*` helpers below.

use std::path::PathBuf;
use std::time::Duration;

/// Default remote classification endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://api.phishsense.com/v1/analyze";

/// Maximum number of results kept in detection history
pub const HISTORY_LIMIT: usize = 100;

/// Maximum number of explanation factors per result
pub const EXPLANATION_LIMIT: usize = 4;

/// Default remote call timeout (milliseconds)
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;

/// Data directory name under the platform data dir
pub const DATA_DIR_NAME: &str = "phishsense";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "PhishSense";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get storage directory from environment or use the platform default
pub fn get_data_dir() -> PathBuf {
    std::env::var("PHISHSENSE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DATA_DIR_NAME)
        })
}

/// Get remote call timeout from environment or use default
pub fn get_remote_timeout() -> Duration {
    let millis = std::env::var("PHISHSENSE_REMOTE_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REMOTE_TIMEOUT_MS);
    Duration::from_millis(millis)
}
