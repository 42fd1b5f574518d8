//! Scoring Rules & Thresholds
//!
//! Định nghĩa indicator weights và risk thresholds.
//! KHÔNG chứa logic score - chỉ constants và indicator table.

// ============================================================================
// RISK THRESHOLDS
// ============================================================================

/// At or above this score = Suspicious
pub const SUSPICIOUS_THRESHOLD: f64 = 0.3;

/// At or above this score = Dangerous
pub const DANGEROUS_THRESHOLD: f64 = 0.6;

/// Weights are kept in hundredths so sums stay exact
pub const POINTS_PER_UNIT: u32 = 100;

// ============================================================================
// TRIGGER LIMITS (indicator fires when value is strictly greater)
// ============================================================================

pub const SPECIAL_CHAR_LIMIT: u32 = 5;
pub const DOMAIN_LENGTH_LIMIT: u32 = 30;
pub const IFRAME_LIMIT: u32 = 2;
pub const HIDDEN_ELEMENT_LIMIT: u32 = 5;
pub const KEYWORD_LIMIT: u32 = 2;

// ============================================================================
// INDICATORS
// ============================================================================

/// One hand-weighted phishing indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    // URL
    SuspiciousTld,
    IpAddressHost,
    AtSymbol,
    DoubleSlashRedirect,
    SuspiciousUrlKeywords,
    ManySpecialChars,
    LongDomain,
    // HTML
    PasswordInput,
    LoginForm,
    ManyIframes,
    ManyHiddenElements,
    MissingFavicon,
    // Text
    SecurityKeywords,
    UrgencyKeywords,
    FinancialKeywords,
    SuspiciousPhrases,
}

impl Indicator {
    /// Weight in hundredths of a score point
    pub const fn points(self) -> u32 {
        match self {
            Indicator::SuspiciousTld => 20,
            Indicator::IpAddressHost => 30,
            Indicator::AtSymbol => 10,
            Indicator::DoubleSlashRedirect => 10,
            Indicator::SuspiciousUrlKeywords => 10,
            Indicator::ManySpecialChars => 10,
            Indicator::LongDomain => 10,
            Indicator::PasswordInput => 10,
            Indicator::LoginForm => 10,
            Indicator::ManyIframes => 10,
            Indicator::ManyHiddenElements => 20,
            Indicator::MissingFavicon => 5,
            Indicator::SecurityKeywords => 10,
            Indicator::UrgencyKeywords => 15,
            Indicator::FinancialKeywords => 15,
            Indicator::SuspiciousPhrases => 20,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::SuspiciousTld => "suspicious_tld",
            Indicator::IpAddressHost => "ip_address_host",
            Indicator::AtSymbol => "at_symbol",
            Indicator::DoubleSlashRedirect => "double_slash_redirect",
            Indicator::SuspiciousUrlKeywords => "suspicious_url_keywords",
            Indicator::ManySpecialChars => "many_special_chars",
            Indicator::LongDomain => "long_domain",
            Indicator::PasswordInput => "password_input",
            Indicator::LoginForm => "login_form",
            Indicator::ManyIframes => "many_iframes",
            Indicator::ManyHiddenElements => "many_hidden_elements",
            Indicator::MissingFavicon => "missing_favicon",
            Indicator::SecurityKeywords => "security_keywords",
            Indicator::UrgencyKeywords => "urgency_keywords",
            Indicator::FinancialKeywords => "financial_keywords",
            Indicator::SuspiciousPhrases => "suspicious_phrases",
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
