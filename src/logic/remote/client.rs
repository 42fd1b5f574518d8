//! Remote Classification Client
//!
//! HTTP client for the remote PhishSense analysis service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::EXPLANATION_LIMIT;
use crate::logic::explain::{self, ExplanationFactor};
use crate::logic::features::PhishingFeatures;
use crate::logic::scoring::{risk_from_score, PhishingStatus, RiskLevel};

/// Remote classification client
pub struct RemoteClient {
    http_client: reqwest::Client,
    timeout: Duration,
}

// Request/Response types

#[derive(Debug, Serialize)]
pub struct ClassifyRequest<'a> {
    pub url: &'a str,
    pub features: &'a PhishingFeatures,
}

/// Either name of each pair may be present; `label` wins over `risk` and
/// `score` wins over `confidence`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifyResponse {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub risk: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub explanation: Option<Vec<ExplanationFactor>>,
}

impl RemoteClient {
    /// Create new remote client; `timeout` bounds the whole exchange
    pub fn new(timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Ask the remote service to classify a page.
    ///
    /// Any error means the service is unavailable for this evaluation and the
    /// caller should score locally.
    pub async fn classify(
        &self,
        endpoint: &str,
        url: &str,
        features: &PhishingFeatures,
    ) -> Result<PhishingStatus, RemoteError> {
        let response = tokio::time::timeout(self.timeout, self.exchange(endpoint, url, features))
            .await
            .map_err(|_| RemoteError::Timeout)??;

        to_status(url, features, response)
    }

    async fn exchange(
        &self,
        endpoint: &str,
        url: &str,
        features: &PhishingFeatures,
    ) -> Result<ClassifyResponse, RemoteError> {
        let request = ClassifyRequest { url, features };

        log::debug!("Requesting remote classification for {} from {}", url, endpoint);

        let response = self.http_client
            .post(endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| RemoteError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            response.json().await
                .map_err(|e| RemoteError::ParseError(e.to_string()))
        } else {
            Err(RemoteError::ServerError(response.status().as_u16()))
        }
    }
}

/// Translate a remote response into the canonical status.
///
/// Risk is re-derived from the score with the local cut points; the label only
/// has to be a scoreable risk level.
pub fn to_status(
    url: &str,
    features: &PhishingFeatures,
    response: ClassifyResponse,
) -> Result<PhishingStatus, RemoteError> {
    let label: RiskLevel = response
        .label
        .or(response.risk)
        .ok_or_else(|| RemoteError::InvalidResponse("missing label".to_string()))?
        .parse()
        .map_err(RemoteError::InvalidResponse)?;
    if !matches!(label, RiskLevel::Safe | RiskLevel::Suspicious | RiskLevel::Dangerous) {
        return Err(RemoteError::InvalidResponse(format!("unscored label '{}'", label)));
    }

    let score = response
        .score
        .or(response.confidence)
        .ok_or_else(|| RemoteError::InvalidResponse("missing score".to_string()))?;
    if !(0.0..=1.0).contains(&score) {
        return Err(RemoteError::InvalidResponse(format!("score {} outside [0, 1]", score)));
    }

    let risk = risk_from_score(score);
    if risk != label {
        log::debug!(
            "Remote label '{}' disagrees with score {} ({}), using score",
            label,
            score,
            risk
        );
    }

    let explanation = match response.explanation {
        Some(mut factors) => {
            factors.truncate(EXPLANATION_LIMIT);
            factors
        }
        None => explain::explain(features, risk),
    };

    Ok(PhishingStatus::new(url, score, risk, explanation))
}

/// Remote client errors
#[derive(Debug, Clone)]
pub enum RemoteError {
    NetworkError(String),
    ServerError(u16),
    ParseError(String),
    InvalidResponse(String),
    Timeout,
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError(e) => write!(f, "Network error: {}", e),
            Self::ServerError(code) => write!(f, "Server error: {}", code),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
            Self::InvalidResponse(e) => write!(f, "Invalid response: {}", e),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for RemoteError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::explain::Impact;
    use crate::logic::features::{extract_features, PageContent};

    fn features() -> PhishingFeatures {
        extract_features("https://example.com", &PageContent::default())
    }

    fn response(label: &str, score: f64) -> ClassifyResponse {
        ClassifyResponse {
            label: Some(label.to_string()),
            score: Some(score),
            ..Default::default()
        }
    }

    fn parse(body: &str) -> Result<PhishingStatus, RemoteError> {
        let parsed: ClassifyResponse = serde_json::from_str(body).unwrap();
        to_status("https://example.com", &features(), parsed)
    }

    #[test]
    fn test_accepts_risk_and_confidence_names() {
        let status = parse(r#"{"risk":"dangerous","confidence":0.9,"url":"x"}"#).unwrap();
        assert_eq!(status.risk, RiskLevel::Dangerous);
        assert_eq!(status.score, 0.9);
    }

    #[test]
    fn test_accepts_both_names_of_a_pair() {
        let status = parse(r#"{"label":"dangerous","risk":"dangerous","score":0.9}"#).unwrap();
        assert_eq!(status.score, 0.9);

        let status = parse(r#"{"label":"dangerous","score":0.9,"confidence":0.2}"#).unwrap();
        assert_eq!(status.score, 0.9);
        assert_eq!(status.risk, RiskLevel::Dangerous);
    }

    #[test]
    fn test_label_preferred_over_risk() {
        // "bogus" under `risk` is ignored because `label` is present
        assert!(parse(r#"{"label":"safe","risk":"bogus","score":0.1}"#).is_ok());
        assert!(parse(r#"{"risk":"bogus","score":0.1}"#).is_err());
    }

    #[test]
    fn test_missing_pair_rejected() {
        assert!(matches!(parse(r#"{"score":0.5}"#), Err(RemoteError::InvalidResponse(_))));
        assert!(matches!(parse(r#"{"label":"safe"}"#), Err(RemoteError::InvalidResponse(_))));
    }

    #[test]
    fn test_risk_rederived_from_score() {
        let status = to_status("https://example.com", &features(), response("safe", 0.65)).unwrap();
        assert_eq!(status.risk, RiskLevel::Dangerous);
        assert_eq!(status.score, 0.65);
        assert_eq!(status.url, "https://example.com");
    }

    #[test]
    fn test_remote_explanation_truncated() {
        let factor = ExplanationFactor::new("F", Impact::Low, "d");
        let mut r = response("suspicious", 0.4);
        r.explanation = Some(vec![factor; 6]);

        let status = to_status("https://example.com", &features(), r).unwrap();
        assert_eq!(status.explanation.len(), 4);
    }

    #[test]
    fn test_missing_explanation_generated_locally() {
        let status = to_status("https://example.com", &features(), response("safe", 0.1)).unwrap();
        let names: Vec<_> = status.explanation.iter().map(|f| f.factor.as_str()).collect();
        assert!(names.contains(&"Legitimate Domain"));
    }

    #[test]
    fn test_rejects_bad_responses() {
        let f = features();
        assert!(to_status("u", &f, response("phishy", 0.5)).is_err());
        assert!(to_status("u", &f, response("error", 0.5)).is_err());
        assert!(to_status("u", &f, response("safe", 1.5)).is_err());
        assert!(to_status("u", &f, response("safe", -0.1)).is_err());
        assert!(to_status("u", &f, response("safe", f64::NAN)).is_err());
    }

    #[test]
    fn test_request_wire_shape() {
        let f = features();
        let request = ClassifyRequest {
            url: "https://example.com",
            features: &f,
        };
        let body = serde_json::to_value(request).unwrap();

        assert_eq!(body["url"], "https://example.com");
        assert!(body["features"]["url_features"].is_object());
        assert!(body["features"]["text_features"].is_object());
        assert!(body["features"]["html_features"].is_object());
    }
}
