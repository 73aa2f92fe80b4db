//! # Input Validation Service
//!
//! アップロード前の入力検証サービス

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::assets::{ReferenceImageSet, VideoAsset};

/// アップロード可能な動画の拡張子
pub const SUPPORTED_VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "avi", "mov"];

/// アップロード可能な参照画像の拡張子
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// 入力検証エラー
///
/// 表示テキストがそのままユーザー向けメッセージになる
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 動画または参照画像が未選択
    #[error("Please upload both video and reference images.")]
    MissingAsset,
    /// サポート対象外の動画形式
    #[error("Invalid video file format. Only .mp4, .avi, or .mov are allowed.")]
    UnsupportedVideoFormat,
    /// サポート対象外の画像形式
    #[error("Invalid image file format: {0}. Only .png, .jpg, or .jpeg are allowed.")]
    UnsupportedImageFormat(String),
}

/// 入力検証サービス
///
/// ネットワーク呼び出しの前に必須アセットの有無を検証するビジネスロジック。
/// 純粋な同期処理で副作用を持たない
pub struct InputValidator;

impl InputValidator {
    /// アップロードに必要なアセットが揃っているか検証する
    ///
    /// # Arguments
    ///
    /// * `video` - 選択中の動画アセット
    /// * `references` - 選択中の参照画像セット
    ///
    /// # Returns
    ///
    /// 検証済みの動画アセットへの参照
    ///
    /// # Errors
    ///
    /// 動画が未選択、または参照画像が空の場合に `MissingAsset`
    pub fn validate_for_upload<'a>(
        video: Option<&'a VideoAsset>,
        references: &ReferenceImageSet,
    ) -> Result<&'a VideoAsset, ValidationError> {
        match video {
            Some(video) if !references.is_empty() => Ok(video),
            _ => Err(ValidationError::MissingAsset),
        }
    }

    /// ファイル名がサポート対象の動画形式か検証する
    ///
    /// # Errors
    ///
    /// 拡張子が `.mp4` / `.avi` / `.mov` 以外の場合に
    /// `UnsupportedVideoFormat`
    pub fn validate_video_format(name: &str) -> Result<(), ValidationError> {
        if Self::has_extension(name, &SUPPORTED_VIDEO_EXTENSIONS) {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedVideoFormat)
        }
    }

    /// ファイル名がサポート対象の画像形式か検証する
    ///
    /// # Errors
    ///
    /// 拡張子が `.png` / `.jpg` / `.jpeg` 以外の場合に
    /// `UnsupportedImageFormat`（ファイル名を含む）
    pub fn validate_image_format(name: &str) -> Result<(), ValidationError> {
        if Self::has_extension(name, &SUPPORTED_IMAGE_EXTENSIONS) {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedImageFormat(name.to_string()))
        }
    }

    /// 拡張子を大文字小文字を無視して照合する
    fn has_extension(name: &str, allowed: &[&str]) -> bool {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| allowed.iter().any(|a| ext.eq_ignore_ascii_case(a)))
    }
}
