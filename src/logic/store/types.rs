//! Store Types
//!
//! Persisted documents: settings, detection history, feedback log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_ENDPOINT, HISTORY_LIMIT};
use crate::logic::scoring::{PhishingStatus, RiskLevel};

// ============================================================================
// SETTINGS
// ============================================================================

/// Stored for forward compatibility; not wired into the score cut points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionThreshold {
    Low,
    #[default]
    Medium,
    High,
}

/// Per-installation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub show_notifications: bool,
    /// Skip the remote service and score locally
    pub use_local_model: bool,
    pub scan_automatically: bool,
    pub detection_threshold: DetectionThreshold,
    pub api_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_notifications: true,
            use_local_model: false,
            scan_automatically: true,
            detection_threshold: DetectionThreshold::Medium,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
        }
    }
}

// ============================================================================
// DETECTION HISTORY
// ============================================================================

/// Most-recent-first list of results, capped at `HISTORY_LIMIT`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionHistory {
    pub items: Vec<PhishingStatus>,
    pub last_updated: DateTime<Utc>,
}

impl Default for DetectionHistory {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            last_updated: Utc::now(),
        }
    }
}

impl DetectionHistory {
    /// Prepend a result and drop the oldest past the cap
    pub fn prepend(&mut self, status: PhishingStatus) {
        self.items.insert(0, status);
        self.items.truncate(HISTORY_LIMIT);
        self.last_updated = Utc::now();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// FEEDBACK
// ============================================================================

/// User disagreement (or agreement) with a classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackData {
    pub url: String,
    pub user_classification: RiskLevel,
    pub system_classification: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackData {
    pub fn new(url: &str, user: RiskLevel, system: RiskLevel) -> Self {
        Self {
            url: url.to_string(),
            user_classification: user,
            system_classification: system,
            reason: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    pub fn is_disagreement(&self) -> bool {
        self.user_classification != self.system_classification
    }
}
