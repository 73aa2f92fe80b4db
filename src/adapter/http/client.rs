//! # HTTP API Client
//!
//! リモートデータセット生成サービスへのHTTPクライアント

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;

use crate::adapter::config::Config;

/// 非成功レスポンスの構造化エラーボディ
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// 成功レスポンスのメッセージボディ
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// APIクライアント
///
/// `reqwest::Client` を各リポジトリで共有し、エンドポイントURLの
/// 組み立てとレスポンスボディの解釈を担当する
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成
    ///
    /// # Errors
    ///
    /// HTTPクライアントの構築に失敗した場合にエラーを返す
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 共有のreqwestクライアントを返す
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// エンドポイントの完全なURLを組み立てる
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 非成功レスポンスからユーザー向けエラーメッセージを取り出す
    ///
    /// 構造化エラー（`{"error": "..."}`）が読めない場合は
    /// フォールバックメッセージを返す
    pub async fn error_message(response: reqwest::Response, fallback: &str) -> String {
        match response.text().await {
            Ok(body) => error_message_from_body(&body, fallback),
            Err(e) => {
                warn!("Failed to read error response body: {e}");
                fallback.to_string()
            }
        }
    }

    /// 成功レスポンスから完了メッセージを取り出す
    ///
    /// ボディに `message` が無い場合はフォールバックメッセージを返す
    pub async fn success_message(response: reqwest::Response, fallback: &str) -> String {
        match response.text().await {
            Ok(body) => success_message_from_body(&body, fallback),
            Err(e) => {
                warn!("Failed to read success response body: {e}");
                fallback.to_string()
            }
        }
    }
}

/// エラーボディから `error` フィールドを取り出す
pub fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| fallback.to_string())
}

/// 成功ボディから `message` フィールドを取り出す
pub fn success_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<MessageBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| fallback.to_string())
}
