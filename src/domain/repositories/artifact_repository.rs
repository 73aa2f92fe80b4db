//! # Artifact Repository Trait
//!
//! 取得したアーカイブの保存を抽象化

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// アーティファクトリポジトリ
///
/// ダウンロード済みアーカイブのローカル保存を担当するリポジトリ。
/// コーディネータはこのインターフェースを通してのみ保存を行い、
/// ファイルシステムの詳細には関与しない
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// バイト列を指定のファイル名で保存する
    ///
    /// # Arguments
    ///
    /// * `bytes` - 保存するアーカイブのバイト列
    /// * `file_name` - 推奨ファイル名（例: `datasets.zip`）
    ///
    /// # Returns
    ///
    /// 保存先のパス
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, bytes: &[u8], file_name: &str) -> Result<PathBuf>;
}
