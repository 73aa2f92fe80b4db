//! # Asset Loading
//!
//! ユーザーが指定したパスからドメインのアセットを読み込む

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::domain::entities::assets::{ReferenceImage, ReferenceImageSet, VideoAsset};
use crate::domain::services::validation::InputValidator;

/// パスから動画アセットを読み込む
///
/// サポート対象外の拡張子はファイルを読む前に拒否する
///
/// # Errors
///
/// 形式がサポート対象外、またはファイルの読み込みに失敗した場合に
/// エラーを返す
pub fn load_video_asset(path: &Path) -> Result<VideoAsset> {
    let name = file_name(path)?;
    InputValidator::validate_video_format(&name)?;

    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read video file: {}", path.display()))?;

    Ok(VideoAsset::new(name, bytes))
}

/// パスのリストから参照画像セットを読み込む
///
/// 指定された順序をそのまま選択順として保持する
///
/// # Errors
///
/// いずれかの画像の形式がサポート対象外、または読み込みに失敗した
/// 場合にエラーを返す
pub fn load_reference_images(paths: &[PathBuf]) -> Result<ReferenceImageSet> {
    let mut images = Vec::with_capacity(paths.len());

    for path in paths {
        let name = file_name(path)?;
        InputValidator::validate_image_format(&name)?;

        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read reference image: {}", path.display()))?;

        images.push(ReferenceImage::new(name, bytes));
    }

    Ok(ReferenceImageSet::new(images))
}

/// パスからファイル名部分を取り出す
fn file_name(path: &Path) -> Result<String> {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => Ok(name.to_string()),
        None => bail!("Invalid file path: {}", path.display()),
    }
}
