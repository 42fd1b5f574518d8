//! Scoring Types
//!
//! Core types cho risk classification.
//! KHÔNG chứa logic - chỉ data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::explain::{ExplanationFactor, Impact};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Classification outcome for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Không có dấu hiệu phishing đáng kể
    Safe,
    /// Một vài dấu hiệu, user nên cẩn thận
    Suspicious,
    /// Nhiều dấu hiệu, khả năng cao là phishing
    Dangerous,
    /// Page never reached scoring
    Unknown,
    /// Scoring could not produce a usable score
    Error,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Suspicious => "suspicious",
            RiskLevel::Dangerous => "dangerous",
            RiskLevel::Unknown => "unknown",
            RiskLevel::Error => "error",
        }
    }

    /// Risks the user gets notified about
    pub fn is_alert(&self) -> bool {
        matches!(self, RiskLevel::Suspicious | RiskLevel::Dangerous)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "safe" => Ok(RiskLevel::Safe),
            "suspicious" => Ok(RiskLevel::Suspicious),
            "dangerous" => Ok(RiskLevel::Dangerous),
            "unknown" => Ok(RiskLevel::Unknown),
            "error" => Ok(RiskLevel::Error),
            other => Err(format!("unknown risk level '{}'", other)),
        }
    }
}

// ============================================================================
// PHISHING STATUS
// ============================================================================

/// Result of one evaluation; the unit stored in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhishingStatus {
    /// 0.0 - 1.0
    pub score: f64,
    pub risk: RiskLevel,
    pub explanation: Vec<ExplanationFactor>,
    pub url: String,
    pub timestamp: DateTime<Utc>,
}

impl PhishingStatus {
    pub fn new(
        url: &str,
        score: f64,
        risk: RiskLevel,
        explanation: Vec<ExplanationFactor>,
    ) -> Self {
        Self {
            score,
            risk,
            explanation,
            url: url.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Analysis could not produce a score
    pub fn error(url: &str) -> Self {
        Self::new(
            url,
            0.0,
            RiskLevel::Error,
            vec![ExplanationFactor::new(
                "Analysis Error",
                Impact::High,
                "Could not analyze the website. Please try again later.",
            )],
        )
    }

    /// Page content was never available for analysis
    pub fn unknown(url: &str) -> Self {
        Self::new(
            url,
            0.0,
            RiskLevel::Unknown,
            vec![ExplanationFactor::new(
                "Page Unavailable",
                Impact::Low,
                "The page content could not be read, so it was not analyzed.",
            )],
        )
    }
}
