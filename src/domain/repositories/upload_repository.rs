//! # Upload Repository Trait
//!
//! アセット一式のアップロードを抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::assets::{ReferenceImageSet, VideoAsset};

/// アップロード結果
///
/// 予期されうる失敗（サービスエラー・トランスポート障害）はすべて
/// `Failure` に畳み込まれ、Err やパニックとして呼び出し元に伝播しない
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// サーバーがアップロードを受理した
    Success {
        /// サーバーからの完了メッセージ
        message: String,
    },
    /// アップロードに失敗した
    Failure {
        /// ユーザーに表示する失敗理由
        reason: String,
    },
}

impl UploadOutcome {
    /// アップロードが成功したかチェックします。
    ///
    /// # 戻り値
    ///
    /// `Success` の場合に `true`
    ///
    /// # 例
    ///
    /// ```
    /// use dsgen::domain::repositories::upload_repository::UploadOutcome;
    ///
    /// let success = UploadOutcome::Success {
    ///     message: "Upload successful".to_string(),
    /// };
    /// assert!(success.is_success());
    ///
    /// let failure = UploadOutcome::Failure {
    ///     reason: "Failed to upload files.".to_string(),
    /// };
    /// assert!(!failure.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success { .. })
    }
}

/// アップロードリポジトリ
///
/// 検証済みアセットのリモートサービスへのアップロードを担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// 動画と参照画像をアップロードする
    ///
    /// # Arguments
    ///
    /// * `video` - アップロードする動画アセット
    /// * `references` - 選択順を保持した参照画像セット
    ///
    /// # Returns
    ///
    /// アップロード結果（失敗も値として返る）
    async fn upload(&self, video: &VideoAsset, references: &ReferenceImageSet) -> UploadOutcome;
}
