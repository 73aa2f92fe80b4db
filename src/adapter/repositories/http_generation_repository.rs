//! # HTTP Generation Repository Implementation
//!
//! GenerationRepositoryのHTTP実装（空ボディで `/process` にPOST）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};

use crate::adapter::http::client::ApiClient;
use crate::domain::repositories::generation_repository::{GenerationRepository, TriggerOutcome};

/// 受理時にユーザーへ表示する「処理中」メッセージ
///
/// サーバーはジョブを受理しただけで、完了はここでは分からない
const GENERATION_ACCEPTED_MESSAGE: &str = "Generating Dataset. It'll take some time....";

/// 構造化エラーが読めない場合のフォールバック
const GENERATION_ERROR_FALLBACK: &str = "Processing failed!";

/// トランスポート障害時のメッセージ
const GENERATION_TRANSPORT_FAILURE: &str = "An error occurred during processing.";

/// HTTP生成リポジトリ
pub struct HttpGenerationRepository {
    api: ApiClient,
}

impl HttpGenerationRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// 生成トリガーを実行する
    ///
    /// # Errors
    ///
    /// リクエストの送信に失敗した場合にエラーを返す
    async fn try_trigger(&self) -> Result<TriggerOutcome> {
        let response = self
            .api
            .http()
            .post(self.api.endpoint("/process"))
            .send()
            .await
            .context("Process request failed")?;

        if response.status().is_success() {
            // 200のボディは契約上無視する（受理のみを意味する）
            info!("Generation job accepted by server");
            Ok(TriggerOutcome::Accepted {
                message: GENERATION_ACCEPTED_MESSAGE.to_string(),
            })
        } else {
            let reason = ApiClient::error_message(response, GENERATION_ERROR_FALLBACK).await;
            Ok(TriggerOutcome::Failure { reason })
        }
    }
}

#[async_trait]
impl GenerationRepository for HttpGenerationRepository {
    async fn trigger(&self) -> TriggerOutcome {
        match self.try_trigger().await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Generation trigger transport failure: {e:#}");
                TriggerOutcome::Failure {
                    reason: GENERATION_TRANSPORT_FAILURE.to_string(),
                }
            }
        }
    }
}
