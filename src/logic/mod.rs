//! Logic Module - Business Logic & Engines
//!
//! Chứa các engines xử lý: Feature extraction, Scoring, Explain, Remote, Store.
//!
//! ## Pipeline
//! - `features/` - URL / HTML / text signal extraction
//! - `scoring/` - Local heuristic scorer and risk bands
//! - `explain/` - Human-readable factors
//! - `remote/` - Remote classification service client
//! - `store/` - Settings, history and feedback persistence
//! - `orchestrator` - One evaluation end to end

pub mod features;
pub mod scoring;
pub mod explain;
pub mod remote;
pub mod store;
pub mod orchestrator;
