//! # Generation Repository Trait
//!
//! データセット生成ジョブのトリガーを抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// 生成トリガー結果
///
/// `Accepted` はサーバーがジョブを受け付けたことを意味し、
/// ジョブの完了を意味しない（fire-and-forget）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// サーバーが非同期処理のジョブを受理した
    Accepted {
        /// ユーザーに表示する「処理中」メッセージ
        message: String,
    },
    /// トリガーに失敗した
    Failure {
        /// ユーザーに表示する失敗理由
        reason: String,
    },
}

/// 生成リポジトリ
///
/// リモートサービスへの生成開始要求を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GenerationRepository: Send + Sync {
    /// データセット生成の開始を要求する
    ///
    /// # Returns
    ///
    /// トリガー結果（失敗も値として返る）
    async fn trigger(&self) -> TriggerOutcome;
}
