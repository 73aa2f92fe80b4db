//! # File Artifact Repository Implementation
//!
//! ArtifactRepositoryのファイルシステム実装（アーカイブをローカル保存）

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;

use crate::domain::repositories::artifact_repository::ArtifactRepository;

/// ファイルシステムベースのアーティファクトリポジトリ
pub struct FileArtifactRepository {
    output_dir: PathBuf,
}

impl FileArtifactRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `output_dir` - アーカイブの保存先ディレクトリ
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// ファイルに保存する（同期処理）
    fn save_sync(path: &Path, bytes: &[u8]) -> Result<()> {
        // Create output directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create output directory")?;
        }

        fs::write(path, bytes).context("Failed to write artifact file")?;

        Ok(())
    }
}

#[async_trait]
impl ArtifactRepository for FileArtifactRepository {
    async fn save(&self, bytes: &[u8], file_name: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let bytes = bytes.to_vec();

        let write_path = path.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&write_path, &bytes))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        info!("Saved artifact to {}", path.display());

        Ok(path)
    }
}
