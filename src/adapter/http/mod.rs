//! HTTP Integration
//!
//! リモートサービスとのHTTP通信

pub mod client;
