//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてワークフローを実現
//! - Repository traitに依存（実装には依存しない）
//! - 外部システムの詳細は知らない
//!
//! ## 構成要素
//!
//! - **coordinator**: ワークフローコーディネータ（状態機械）

pub mod coordinator;
