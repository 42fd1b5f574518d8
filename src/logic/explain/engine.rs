use super::types::{ExplanationFactor, Impact};
use crate::constants::EXPLANATION_LIMIT;
use crate::logic::features::PhishingFeatures;
use crate::logic::scoring::rules::{HIDDEN_ELEMENT_LIMIT, IFRAME_LIMIT, KEYWORD_LIMIT};
use crate::logic::scoring::RiskLevel;

/// Build the human-readable explanation for a scored page.
///
/// Rules run in a fixed order (URL, then HTML, then text) and that order is
/// the relevance order. Only the first `EXPLANATION_LIMIT` factors are kept.
pub fn explain(features: &PhishingFeatures, risk: RiskLevel) -> Vec<ExplanationFactor> {
    let mut factors = Vec::new();

    if let Some(url) = features.url_features.extracted() {
        if url.has_suspicious_tld {
            factors.push(ExplanationFactor::new(
                "Suspicious Domain",
                Impact::High,
                "The website uses a suspicious top-level domain often associated with free domains used in phishing.",
            ));
        }
        if url.has_ip_address {
            factors.push(ExplanationFactor::new(
                "IP Address URL",
                Impact::High,
                "The URL contains an IP address instead of a domain name, which is rarely used for legitimate websites.",
            ));
        }
        if url.has_suspicious_keywords {
            factors.push(ExplanationFactor::new(
                "Suspicious Keywords",
                Impact::Medium,
                "The URL contains words often used in phishing attempts, like \"login\", \"verify\", or \"secure\".",
            ));
        }
    }

    if let Some(html) = features.html_features.extracted() {
        if html.has_login_form {
            let impact = if risk == RiskLevel::Safe { Impact::Low } else { Impact::Medium };
            factors.push(ExplanationFactor::new(
                "Login Form Detected",
                impact,
                "The page contains a login form asking for credentials.",
            ));
        }
        if html.iframe_count > IFRAME_LIMIT {
            factors.push(ExplanationFactor::new(
                "Multiple iFrames",
                Impact::Medium,
                "The page uses multiple embedded frames, which can be used to load content from other sources.",
            ));
        }
        if html.hidden_element_count > HIDDEN_ELEMENT_LIMIT {
            factors.push(ExplanationFactor::new(
                "Hidden Elements",
                Impact::High,
                "The page contains multiple hidden elements, which may be attempting to hide malicious content.",
            ));
        }
    }

    if let Some(text) = features.text_features.extracted() {
        if text.urgency_keyword_count > KEYWORD_LIMIT {
            factors.push(ExplanationFactor::new(
                "Urgent Language",
                Impact::Medium,
                "The page uses urgent language to pressure users into taking immediate action.",
            ));
        }
        if text.has_suspicious_phrases {
            factors.push(ExplanationFactor::new(
                "Suspicious Phrases",
                Impact::High,
                "The page contains phrases commonly used in phishing attempts, like \"verify your account\" or \"security alert\".",
            ));
        }
    }

    // Positive factors for safe sites
    if risk == RiskLevel::Safe {
        if let Some(url) = features.url_features.extracted() {
            if !url.has_suspicious_tld && !url.has_ip_address {
                factors.push(ExplanationFactor::new(
                    "Legitimate Domain",
                    Impact::Low,
                    "The website uses a standard domain name without suspicious characteristics.",
                ));
            }
            if url.has_https {
                factors.push(ExplanationFactor::new(
                    "Secure Connection",
                    Impact::Low,
                    "The site uses HTTPS, which provides a secure connection.",
                ));
            }
        }
    }

    factors.truncate(EXPLANATION_LIMIT);
    factors
}
