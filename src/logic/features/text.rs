//! Text Feature Extraction
//!
//! Keyword / phrase matching trên visible text của page.

use super::types::{ExtractionError, FeatureGroup, TextFeatures};

pub const SECURITY_KEYWORDS: &[&str] = &[
    "verify", "confirm", "update", "login", "sign in", "validate", "secure",
];

pub const URGENCY_KEYWORDS: &[&str] = &[
    "urgent", "immediately", "alert", "attention", "important", "action required",
];

pub const FINANCIAL_KEYWORDS: &[&str] = &[
    "account", "credit card", "bank", "paypal", "transaction", "suspended", "limited",
];

pub const SUSPICIOUS_PHRASES: &[&str] = &[
    "verify your account",
    "confirm your identity",
    "account has been suspended",
    "unusual activity",
    "security alert",
];

/// Extract text features; total over any input
pub fn extract_text_features(text: &str) -> FeatureGroup<TextFeatures> {
    try_extract(text).into()
}

fn try_extract(text: &str) -> Result<TextFeatures, ExtractionError> {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();

    let total_word_count = words.len() as u32;
    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        let total_len: usize = words.iter().map(|w| w.chars().count()).sum();
        total_len as f64 / words.len() as f64
    };

    let char_count = text.chars().count();
    let special = text
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
        .count();
    let uppercase = text.chars().filter(|c| c.is_ascii_uppercase()).count();

    Ok(TextFeatures {
        security_keyword_count: count_present(&lower, SECURITY_KEYWORDS),
        urgency_keyword_count: count_present(&lower, URGENCY_KEYWORDS),
        financial_keyword_count: count_present(&lower, FINANCIAL_KEYWORDS),
        total_word_count,
        avg_word_length,
        special_char_ratio: ratio(special, char_count),
        uppercase_ratio: ratio(uppercase, char_count),
        has_suspicious_phrases: SUSPICIOUS_PHRASES.iter().any(|p| lower.contains(p)),
    })
}

/// Number of list entries that occur in the text
fn count_present(lower: &str, list: &[&str]) -> u32 {
    list.iter().filter(|k| lower.contains(*k)).count() as u32
}

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(text: &str) -> TextFeatures {
        extract_text_features(text).extracted().cloned().expect("text group")
    }

    #[test]
    fn test_phishing_text() {
        let text = "Welcome to our secure site. Please login to verify your account. \
            Important: Your account may be limited if you don't update your information immediately.";
        let f = features(text);
        // secure, login, verify, update
        assert_eq!(f.security_keyword_count, 4);
        // important, immediately
        assert_eq!(f.urgency_keyword_count, 2);
        // account, limited
        assert_eq!(f.financial_keyword_count, 2);
        assert!(f.has_suspicious_phrases);
    }

    #[test]
    fn test_empty_text_has_no_division_by_zero() {
        let f = features("");
        assert_eq!(f.total_word_count, 0);
        assert_eq!(f.avg_word_length, 0.0);
        assert_eq!(f.special_char_ratio, 0.0);
        assert_eq!(f.uppercase_ratio, 0.0);

        let blank = features("   \n\t ");
        assert_eq!(blank.total_word_count, 0);
        assert_eq!(blank.avg_word_length, 0.0);
    }

    #[test]
    fn test_word_stats_and_ratios() {
        let f = features("AB cd!");
        assert_eq!(f.total_word_count, 2);
        // "ab" + "cd!" = 5 chars over 2 words
        assert!((f.avg_word_length - 2.5).abs() < 1e-9);
        // 6 chars: '!' special, 'A','B' uppercase
        assert!((f.special_char_ratio - 1.0 / 6.0).abs() < 1e-9);
        assert!((f.uppercase_ratio - 2.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_phrases_case_insensitive() {
        assert!(features("SECURITY ALERT: unusual sign-in").has_suspicious_phrases);
        assert!(!features("Have a nice day").has_suspicious_phrases);
    }
}
