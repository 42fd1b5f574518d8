//! Feature Types
//!
//! Fixed-shape feature groups cho một page (url / html / text).
//! KHÔNG chứa logic extraction - chỉ data structures.

use serde::{Serialize, Serializer};

// ============================================================================
// FEATURE GROUP
// ============================================================================

/// Result of extracting one feature group.
///
/// A failed group is carried forward instead of aborting the evaluation.
/// On the wire it serializes as `{"error": 1}`.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGroup<T> {
    Extracted(T),
    Failed,
}

impl<T> FeatureGroup<T> {
    pub fn extracted(&self) -> Option<&T> {
        match self {
            FeatureGroup::Extracted(features) => Some(features),
            FeatureGroup::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FeatureGroup::Failed)
    }
}

impl<T> From<Result<T, ExtractionError>> for FeatureGroup<T> {
    fn from(result: Result<T, ExtractionError>) -> Self {
        match result {
            Ok(features) => FeatureGroup::Extracted(features),
            Err(e) => {
                log::warn!("Feature extraction failed: {}", e);
                FeatureGroup::Failed
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorMarker {
    error: u8,
}

impl<T: Serialize> Serialize for FeatureGroup<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FeatureGroup::Extracted(features) => features.serialize(serializer),
            FeatureGroup::Failed => ErrorMarker { error: 1 }.serialize(serializer),
        }
    }
}

/// Flags are booleans in Rust and 0/1 on the wire.
fn as_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

// ============================================================================
// URL FEATURES
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UrlFeatures {
    pub domain_length: u32,
    pub path_length: u32,
    /// Dot-separated host labels minus one
    pub subdomain_count: u32,
    #[serde(serialize_with = "as_flag")]
    pub has_https: bool,
    /// Non-empty path segments
    pub path_depth: u32,
    #[serde(serialize_with = "as_flag")]
    pub has_suspicious_tld: bool,
    #[serde(serialize_with = "as_flag")]
    pub has_ip_address: bool,
    #[serde(serialize_with = "as_flag")]
    pub has_at_symbol: bool,
    #[serde(serialize_with = "as_flag")]
    pub has_double_slash_redirect: bool,
    pub special_char_count: u32,
    pub digit_count: u32,
    #[serde(serialize_with = "as_flag")]
    pub has_suspicious_keywords: bool,
}

// ============================================================================
// HTML FEATURES
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HtmlFeatures {
    pub form_count: u32,
    pub password_input_count: u32,
    pub external_link_count: u32,
    pub iframe_count: u32,
    pub script_count: u32,
    /// Inline `display:none` or `hidden` attribute
    pub hidden_element_count: u32,
    pub image_count: u32,
    #[serde(serialize_with = "as_flag")]
    pub has_favicon: bool,
    #[serde(serialize_with = "as_flag")]
    pub has_password_field: bool,
    #[serde(serialize_with = "as_flag")]
    pub has_login_form: bool,
}

// ============================================================================
// TEXT FEATURES
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextFeatures {
    pub security_keyword_count: u32,
    pub urgency_keyword_count: u32,
    pub financial_keyword_count: u32,
    pub total_word_count: u32,
    pub avg_word_length: f64,
    pub special_char_ratio: f64,
    pub uppercase_ratio: f64,
    #[serde(serialize_with = "as_flag")]
    pub has_suspicious_phrases: bool,
}

// ============================================================================
// AGGREGATE
// ============================================================================

/// All feature groups for one URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhishingFeatures {
    pub url_features: FeatureGroup<UrlFeatures>,
    pub text_features: FeatureGroup<TextFeatures>,
    pub html_features: FeatureGroup<HtmlFeatures>,
}

impl PhishingFeatures {
    /// True when no group produced usable signals
    pub fn all_failed(&self) -> bool {
        self.url_features.is_failed()
            && self.html_features.is_failed()
            && self.text_features.is_failed()
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug)]
pub enum ExtractionError {
    InvalidUrl(url::ParseError),
    InvalidSelector(String),
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::InvalidUrl(e) => write!(f, "Invalid URL: {}", e),
            ExtractionError::InvalidSelector(s) => write!(f, "Invalid selector: {}", s),
        }
    }
}

impl std::error::Error for ExtractionError {}

impl From<url::ParseError> for ExtractionError {
    fn from(err: url::ParseError) -> Self {
        ExtractionError::InvalidUrl(err)
    }
}
