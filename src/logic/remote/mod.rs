//! Remote Module - Remote classification service
//!
//! Gọi remote service để phân loại page. Mọi lỗi (network, timeout, status,
//! response không hợp lệ) đều là `RemoteError` và orchestrator sẽ fallback
//! sang local scorer.

pub mod client;

pub use client::{ClassifyRequest, ClassifyResponse, RemoteClient, RemoteError};
