//! Local Heuristic Scorer
//!
//! CHỈ chứa logic score - không có types, không có I/O.
//! Input: PhishingFeatures
//! Output: PhishingStatus (score + risk + explanation)

use super::rules::{
    Indicator, DANGEROUS_THRESHOLD, DOMAIN_LENGTH_LIMIT, HIDDEN_ELEMENT_LIMIT, IFRAME_LIMIT,
    KEYWORD_LIMIT, POINTS_PER_UNIT, SPECIAL_CHAR_LIMIT, SUSPICIOUS_THRESHOLD,
};
use super::types::{PhishingStatus, RiskLevel};
use crate::logic::explain;
use crate::logic::features::PhishingFeatures;

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

/// Score a page locally.
///
/// Deterministic: identical `(url, features)` always give the same score and
/// explanation; only the timestamp differs.
pub fn score(url: &str, features: &PhishingFeatures) -> PhishingStatus {
    if features.all_failed() {
        log::warn!("No feature group available for {}, cannot score", url);
        return PhishingStatus::error(url);
    }

    let indicators = triggered_indicators(features);
    let score = score_indicators(&indicators);
    let risk = risk_from_score(score);
    let explanation = explain::explain(features, risk);

    log::debug!(
        "Local score for {}: {:.2} ({}) from [{}]",
        url,
        score,
        risk,
        indicators.iter().map(|i| i.as_str()).collect::<Vec<_>>().join(", ")
    );

    PhishingStatus::new(url, score, risk, explanation)
}

/// Sum indicator weights, clamped to 1.0
pub fn score_indicators(indicators: &[Indicator]) -> f64 {
    let points: u32 = indicators.iter().map(|i| i.points()).sum();
    points.min(POINTS_PER_UNIT) as f64 / POINTS_PER_UNIT as f64
}

/// Map a score to its risk band
pub fn risk_from_score(score: f64) -> RiskLevel {
    if score < SUSPICIOUS_THRESHOLD {
        RiskLevel::Safe
    } else if score < DANGEROUS_THRESHOLD {
        RiskLevel::Suspicious
    } else {
        RiskLevel::Dangerous
    }
}

/// Indicators that fire for these features, in table order.
/// Failed groups contribute nothing.
pub fn triggered_indicators(features: &PhishingFeatures) -> Vec<Indicator> {
    let mut fired = Vec::new();

    if let Some(url) = features.url_features.extracted() {
        if url.has_suspicious_tld {
            fired.push(Indicator::SuspiciousTld);
        }
        if url.has_ip_address {
            fired.push(Indicator::IpAddressHost);
        }
        if url.has_at_symbol {
            fired.push(Indicator::AtSymbol);
        }
        if url.has_double_slash_redirect {
            fired.push(Indicator::DoubleSlashRedirect);
        }
        if url.has_suspicious_keywords {
            fired.push(Indicator::SuspiciousUrlKeywords);
        }
        if url.special_char_count > SPECIAL_CHAR_LIMIT {
            fired.push(Indicator::ManySpecialChars);
        }
        if url.domain_length > DOMAIN_LENGTH_LIMIT {
            fired.push(Indicator::LongDomain);
        }
    }

    if let Some(html) = features.html_features.extracted() {
        if html.password_input_count > 0 {
            fired.push(Indicator::PasswordInput);
        }
        if html.has_login_form {
            fired.push(Indicator::LoginForm);
        }
        if html.iframe_count > IFRAME_LIMIT {
            fired.push(Indicator::ManyIframes);
        }
        if html.hidden_element_count > HIDDEN_ELEMENT_LIMIT {
            fired.push(Indicator::ManyHiddenElements);
        }
        if !html.has_favicon {
            fired.push(Indicator::MissingFavicon);
        }
    }

    if let Some(text) = features.text_features.extracted() {
        if text.security_keyword_count > KEYWORD_LIMIT {
            fired.push(Indicator::SecurityKeywords);
        }
        if text.urgency_keyword_count > KEYWORD_LIMIT {
            fired.push(Indicator::UrgencyKeywords);
        }
        if text.financial_keyword_count > KEYWORD_LIMIT {
            fired.push(Indicator::FinancialKeywords);
        }
        if text.has_suspicious_phrases {
            fired.push(Indicator::SuspiciousPhrases);
        }
    }

    fired
}

// ============================================================================
// TESTS
// ============================================================================
