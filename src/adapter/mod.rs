//! Adapter Layer
//!
//! 外部システム（HTTPサービス, ファイルシステム）との統合

pub mod assets;
pub mod config;
pub mod http;
pub mod repositories;
