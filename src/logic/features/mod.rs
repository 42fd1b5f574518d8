//! Features Module - Feature Extraction Engine
//!
//! Raw page signals (URL, markup, visible text) → structured feature groups.
//! Mỗi group được extract độc lập: lỗi ở một group không ảnh hưởng các group khác.

pub mod types;
pub mod url;
pub mod html;
pub mod text;


use serde::{Deserialize, Serialize};

// Re-export common types
pub use types::{
    ExtractionError, FeatureGroup, HtmlFeatures, PhishingFeatures, TextFeatures, UrlFeatures,
};
pub use self::url::extract_url_features;
pub use html::extract_html_features;
pub use text::extract_text_features;

/// Page content captured by the page-content provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContent {
    pub html: String,
    pub text: String,
}

impl PageContent {
    pub fn new(html: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            text: text.into(),
        }
    }
}

/// Extract all feature groups for a page
pub fn extract_features(url: &str, content: &PageContent) -> PhishingFeatures {
    PhishingFeatures {
        url_features: extract_url_features(url),
        text_features: extract_text_features(&content.text),
        html_features: extract_html_features(&content.html, url),
    }
}
