//! Scoring Module
//!
//! Local heuristic scorer: phân loại page dựa trên hand-weighted indicators.
//! Đây là CORE STEP khi remote service không dùng được.
//!
//! ## Structure
//! - `types`: Core types (RiskLevel, PhishingStatus)
//! - `rules`: Thresholds, limits and the indicator table
//! - `scorer`: Scoring logic
//!
//! ## Usage
//! ```ignore
//! use crate::logic::scoring::{score, RiskLevel};
//!
//! let status = score(url, &features);
//! match status.risk {
//!     RiskLevel::Safe => println!("Safe"),
//!     RiskLevel::Suspicious => println!("Careful"),
//!     RiskLevel::Dangerous => println!("Phishing likely"),
//!     _ => println!("Not scored"),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod scorer;

pub use types::{PhishingStatus, RiskLevel};
pub use rules::{Indicator, DANGEROUS_THRESHOLD, SUSPICIOUS_THRESHOLD};
pub use scorer::{risk_from_score, score, score_indicators, triggered_indicators};
