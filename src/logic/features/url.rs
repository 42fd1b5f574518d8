//! URL Feature Extraction
//!
//! Trích xuất các features từ URL string.
//! Host-derived signals use the parsed URL; the rest inspect the raw input.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::types::{ExtractionError, FeatureGroup, UrlFeatures};

/// TLDs commonly handed out for free and abused for phishing
pub const SUSPICIOUS_TLDS: &[&str] = &["xyz", "tk", "ml", "ga", "cf", "gq"];

/// Case-insensitive substrings that hint at credential pages
pub const SUSPICIOUS_URL_KEYWORDS: &[&str] = &[
    "login", "signin", "verify", "secure", "account", "update", "confirm",
];

static IPV4_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").expect("valid IPv4 pattern"));

/// Extract URL features; an unparsable URL yields a failed group
pub fn extract_url_features(url: &str) -> FeatureGroup<UrlFeatures> {
    try_extract(url).into()
}

fn try_extract(raw: &str) -> Result<UrlFeatures, ExtractionError> {
    let parsed = Url::parse(raw)?;
    let domain = parsed.host_str().unwrap_or("");
    let path = parsed.path();
    let lower = raw.to_lowercase();

    let tld = domain.rsplit('.').next().unwrap_or("");

    Ok(UrlFeatures {
        domain_length: domain.chars().count() as u32,
        path_length: path.chars().count() as u32,
        subdomain_count: domain.split('.').count().saturating_sub(1) as u32,
        has_https: parsed.scheme() == "https",
        path_depth: path.split('/').filter(|s| !s.is_empty()).count() as u32,
        has_suspicious_tld: SUSPICIOUS_TLDS.contains(&tld),
        has_ip_address: IPV4_PATTERN.is_match(domain),
        has_at_symbol: raw.contains('@'),
        has_double_slash_redirect: has_double_slash_redirect(raw),
        special_char_count: raw.chars().filter(|c| !is_plain_url_char(*c)).count() as u32,
        digit_count: raw.chars().filter(|c| c.is_ascii_digit()).count() as u32,
        has_suspicious_keywords: SUSPICIOUS_URL_KEYWORDS.iter().any(|k| lower.contains(k)),
    })
}

/// A second `//` after the one following the scheme
fn has_double_slash_redirect(raw: &str) -> bool {
    match (raw.find("//"), raw.rfind("//")) {
        (Some(first), Some(last)) => last > first + 1,
        _ => false,
    }
}

/// Characters in `[a-zA-Z0-9./:?&=-]`
fn is_plain_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '/' | ':' | '?' | '&' | '=' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(url: &str) -> UrlFeatures {
        extract_url_features(url).extracted().cloned().expect("url should parse")
    }

    #[test]
    fn test_basic_https_url() {
        let f = features("https://www.example.com/a/b/page.html");
        assert_eq!(f.domain_length, 15);
        assert_eq!(f.subdomain_count, 2);
        assert!(f.has_https);
        assert_eq!(f.path_depth, 3);
        assert_eq!(f.path_length, 14);
        assert!(!f.has_suspicious_tld);
        assert!(!f.has_ip_address);
        assert!(!f.has_suspicious_keywords);
    }

    #[test]
    fn test_ip_literal_with_keyword() {
        let f = features("http://192.168.1.5/login");
        assert!(f.has_ip_address);
        assert!(f.has_suspicious_keywords);
        assert!(!f.has_https);
        assert_eq!(f.digit_count, 8);
    }

    #[test]
    fn test_suspicious_tld() {
        assert!(features("http://free-prizes.tk/").has_suspicious_tld);
        assert!(features("http://cheap.xyz").has_suspicious_tld);
        assert!(!features("http://example.org").has_suspicious_tld);
    }

    #[test]
    fn test_at_symbol_and_redirect() {
        let f = features("http://user@evil.com/redirect//https://bank.com");
        assert!(f.has_at_symbol);
        assert!(f.has_double_slash_redirect);

        let clean = features("https://example.com/path");
        assert!(!clean.has_at_symbol);
        assert!(!clean.has_double_slash_redirect);
    }

    #[test]
    fn test_special_char_count() {
        // '_', '%', '2', '0' -> only '_' and '%' are special
        let f = features("https://example.com/a_b%20c");
        assert_eq!(f.special_char_count, 2);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert!(features("https://example.com/SignIn").has_suspicious_keywords);
    }

    #[test]
    fn test_unparsable_url_fails_group() {
        assert!(extract_url_features("not a url").is_failed());
        assert!(extract_url_features("").is_failed());
    }
}
