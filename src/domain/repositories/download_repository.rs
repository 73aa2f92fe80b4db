//! # Download Repository Trait
//!
//! 生成済みアーカイブの取得を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// ダウンロード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// アーカイブの取得に成功した
    Success {
        /// アーカイブのバイト列
        archive: Vec<u8>,
    },
    /// ダウンロードに失敗した
    Failure {
        /// ユーザーに表示する失敗理由
        reason: String,
    },
}

/// ダウンロードリポジトリ
///
/// リモートサービスからの生成結果取得を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DownloadRepository: Send + Sync {
    /// 生成済みアーカイブを取得する
    ///
    /// # Returns
    ///
    /// ダウンロード結果（失敗も値として返る）
    async fn download(&self) -> DownloadOutcome;
}
