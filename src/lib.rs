//! PhishSense Core - phishing risk scoring for web pages

pub mod api;
pub mod constants;
pub mod logic;
