//! # Domain Repositories
//!
//! リモート操作とローカル保存のインターフェース定義

pub mod artifact_repository;
pub mod download_repository;
pub mod generation_repository;
pub mod upload_repository;
