//! # HTTP Upload Repository Implementation
//!
//! UploadRepositoryのHTTP実装（multipart/form-dataで `/upload` にPOST）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::multipart::{Form, Part};

use crate::adapter::http::client::ApiClient;
use crate::domain::entities::assets::{ReferenceImageSet, VideoAsset};
use crate::domain::repositories::upload_repository::{UploadOutcome, UploadRepository};

/// 成功ボディに `message` が無い場合のフォールバック
const UPLOAD_SUCCESS_FALLBACK: &str = "Upload successful";

/// 構造化エラーが読めない場合のフォールバック
const UPLOAD_ERROR_FALLBACK: &str = "Failed to upload files.";

/// トランスポート障害時のメッセージ
const UPLOAD_TRANSPORT_FAILURE: &str = "Upload failed due to an error.";

/// HTTPアップロードリポジトリ
pub struct HttpUploadRepository {
    api: ApiClient,
}

impl HttpUploadRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// multipartフォームを組み立てる
    ///
    /// `video` フィールドに動画1件、`references` フィールドに
    /// 参照画像を選択順で1件ずつ追加する
    fn build_form(video: &VideoAsset, references: &ReferenceImageSet) -> Form {
        let mut form = Form::new().part(
            "video",
            Part::bytes(video.bytes.clone()).file_name(video.name.clone()),
        );

        for image in references.iter() {
            form = form.part(
                "references",
                Part::bytes(image.bytes.clone()).file_name(image.name.clone()),
            );
        }

        form
    }

    /// アップロードを実行する
    ///
    /// # Errors
    ///
    /// リクエストの送信に失敗した場合にエラーを返す
    /// （`upload` がトランスポート障害メッセージに変換する）
    async fn try_upload(
        &self,
        video: &VideoAsset,
        references: &ReferenceImageSet,
    ) -> Result<UploadOutcome> {
        let form = Self::build_form(video, references);

        let response = self
            .api
            .http()
            .post(self.api.endpoint("/upload"))
            .multipart(form)
            .send()
            .await
            .context("Upload request failed")?;

        if response.status().is_success() {
            info!(
                "Uploaded video '{}' with {} reference images",
                video.name,
                references.len()
            );
            let message = ApiClient::success_message(response, UPLOAD_SUCCESS_FALLBACK).await;
            Ok(UploadOutcome::Success { message })
        } else {
            let reason = ApiClient::error_message(response, UPLOAD_ERROR_FALLBACK).await;
            Ok(UploadOutcome::Failure { reason })
        }
    }
}

#[async_trait]
impl UploadRepository for HttpUploadRepository {
    async fn upload(&self, video: &VideoAsset, references: &ReferenceImageSet) -> UploadOutcome {
        match self.try_upload(video, references).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Upload transport failure: {e:#}");
                UploadOutcome::Failure {
                    reason: UPLOAD_TRANSPORT_FAILURE.to_string(),
                }
            }
        }
    }
}
