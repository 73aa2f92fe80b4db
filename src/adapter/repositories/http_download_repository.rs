//! # HTTP Download Repository Implementation
//!
//! DownloadRepositoryのHTTP実装（`/download` からアーカイブを取得）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};

use crate::adapter::http::client::ApiClient;
use crate::domain::repositories::download_repository::{DownloadOutcome, DownloadRepository};

/// 構造化エラーが読めない場合のフォールバック
const DOWNLOAD_ERROR_FALLBACK: &str = "Failed to download dataset.";

/// トランスポート障害時のメッセージ
const DOWNLOAD_TRANSPORT_FAILURE: &str = "Download failed due to an error.";

/// HTTPダウンロードリポジトリ
pub struct HttpDownloadRepository {
    api: ApiClient,
}

impl HttpDownloadRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// ダウンロードを実行する
    ///
    /// # Errors
    ///
    /// リクエストの送信またはボディの読み取りに失敗した場合にエラーを返す
    async fn try_download(&self) -> Result<DownloadOutcome> {
        let response = self
            .api
            .http()
            .get(self.api.endpoint("/download"))
            .send()
            .await
            .context("Download request failed")?;

        if response.status().is_success() {
            let bytes = response
                .bytes()
                .await
                .context("Failed to read archive body")?;

            info!("Downloaded dataset archive ({} bytes)", bytes.len());
            Ok(DownloadOutcome::Success {
                archive: bytes.to_vec(),
            })
        } else {
            let reason = ApiClient::error_message(response, DOWNLOAD_ERROR_FALLBACK).await;
            Ok(DownloadOutcome::Failure { reason })
        }
    }
}

#[async_trait]
impl DownloadRepository for HttpDownloadRepository {
    async fn download(&self) -> DownloadOutcome {
        match self.try_download().await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Download transport failure: {e:#}");
                DownloadOutcome::Failure {
                    reason: DOWNLOAD_TRANSPORT_FAILURE.to_string(),
                }
            }
        }
    }
}
