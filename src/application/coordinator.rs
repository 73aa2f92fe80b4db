//! # Workflow Coordinator
//!
//! ワークフロー状態を所有し、リモート3操作を順序付けるコーディネータ

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use crate::domain::entities::assets::{ReferenceImageSet, VideoAsset};
use crate::domain::entities::workflow_state::WorkflowState;
use crate::domain::repositories::artifact_repository::ArtifactRepository;
use crate::domain::repositories::download_repository::{DownloadOutcome, DownloadRepository};
use crate::domain::repositories::generation_repository::{GenerationRepository, TriggerOutcome};
use crate::domain::repositories::upload_repository::{UploadOutcome, UploadRepository};
use crate::domain::services::validation::InputValidator;

/// ダウンロードしたアーカイブの保存名
pub const ARCHIVE_FILE_NAME: &str = "datasets.zip";

/// コーディネータの内部状態
///
/// ロックは同期処理の間のみ保持し、`.await` をまたいで保持しない
#[derive(Debug, Default)]
struct CoordinatorState {
    state: WorkflowState,
    message: String,
    video: Option<VideoAsset>,
    references: ReferenceImageSet,
}

/// ワークフローコーディネータ
///
/// ワークフロー状態とステータスメッセージを所有し、アップロード・
/// 生成トリガー・ダウンロードの3操作を順序付ける。状態とメッセージを
/// 変更するのはこの型のアクションハンドラのみで、実行中（in-flight）の
/// 操作は常に高々1つに制限される
pub struct WorkflowCoordinator<U, G, D, A> {
    upload_repository: Arc<U>,
    generation_repository: Arc<G>,
    download_repository: Arc<D>,
    artifact_repository: Arc<A>,
    inner: Mutex<CoordinatorState>,
}

impl<U, G, D, A> WorkflowCoordinator<U, G, D, A>
where
    U: UploadRepository,
    G: GenerationRepository,
    D: DownloadRepository,
    A: ArtifactRepository,
{
    /// 新しいコーディネータを作成
    ///
    /// # Arguments
    ///
    /// * `upload_repository` - アップロードリポジトリ
    /// * `generation_repository` - 生成リポジトリ
    /// * `download_repository` - ダウンロードリポジトリ
    /// * `artifact_repository` - アーティファクトリポジトリ
    pub fn new(
        upload_repository: Arc<U>,
        generation_repository: Arc<G>,
        download_repository: Arc<D>,
        artifact_repository: Arc<A>,
    ) -> Self {
        Self {
            upload_repository,
            generation_repository,
            download_repository,
            artifact_repository,
            inner: Mutex::new(CoordinatorState::default()),
        }
    }

    /// 現在のワークフロー状態を返す
    pub fn state(&self) -> WorkflowState {
        self.inner.lock().state
    }

    /// 直近に完了した操作のステータスメッセージを返す
    pub fn message(&self) -> String {
        self.inner.lock().message.clone()
    }

    /// 動画を選択する
    ///
    /// 以前の選択は丸ごと置き換えられる。選択はワークフロー段階では
    /// ないため、どの状態でも受け付ける
    pub fn select_video(&self, video: VideoAsset) {
        self.inner.lock().video = Some(video);
    }

    /// 参照画像を選択する
    ///
    /// 以前の選択は丸ごと置き換えられる
    pub fn select_references(&self, references: ReferenceImageSet) {
        self.inner.lock().references = references;
    }

    /// アップロードを要求する
    ///
    /// 検証に失敗した場合はネットワーク呼び出しを行わず、`Idle` のまま
    /// メッセージのみ更新する。検証成功時は `Uploading` に遷移して
    /// アップロードし、結果に応じて `Idle` または `Error` に戻る。
    /// 実行中の操作がある間は何もしない
    pub async fn request_upload(&self) {
        let (video, references) = {
            let mut inner = self.inner.lock();
            if !inner.state.can_start() {
                debug!("upload request ignored while {:?}", inner.state);
                return;
            }

            let validated = InputValidator::validate_for_upload(
                inner.video.as_ref(),
                &inner.references,
            )
            .map(|video| video.clone());

            match validated {
                Ok(video) => {
                    let references = inner.references.clone();
                    inner.state = WorkflowState::Uploading;
                    (video, references)
                }
                Err(e) => {
                    inner.state = WorkflowState::Idle;
                    inner.message = e.to_string();
                    return;
                }
            }
        };

        let outcome = self.upload_repository.upload(&video, &references).await;

        let mut inner = self.inner.lock();
        match outcome {
            UploadOutcome::Success { message } => {
                inner.state = WorkflowState::Idle;
                inner.message = message;
            }
            UploadOutcome::Failure { reason } => {
                inner.state = WorkflowState::Error;
                inner.message = reason;
            }
        }
    }

    /// データセット生成の開始を要求する
    ///
    /// 成功はジョブの受理を意味し、完了を意味しない。
    /// 実行中の操作がある間は何もしない
    pub async fn request_generation(&self) {
        {
            let mut inner = self.inner.lock();
            if !inner.state.can_start() {
                debug!("generation request ignored while {:?}", inner.state);
                return;
            }
            inner.state = WorkflowState::Generating;
        }

        let outcome = self.generation_repository.trigger().await;

        let mut inner = self.inner.lock();
        match outcome {
            TriggerOutcome::Accepted { message } => {
                inner.state = WorkflowState::Idle;
                inner.message = message;
            }
            TriggerOutcome::Failure { reason } => {
                inner.state = WorkflowState::Error;
                inner.message = reason;
            }
        }
    }

    /// 生成結果のダウンロードを要求する
    ///
    /// 取得に成功した場合はアーティファクトリポジトリに
    /// [`ARCHIVE_FILE_NAME`] での保存を委譲する。
    /// 実行中の操作がある間は何もしない
    pub async fn request_download(&self) {
        {
            let mut inner = self.inner.lock();
            if !inner.state.can_start() {
                debug!("download request ignored while {:?}", inner.state);
                return;
            }
            inner.state = WorkflowState::Downloading;
        }

        let archive = match self.download_repository.download().await {
            DownloadOutcome::Success { archive } => archive,
            DownloadOutcome::Failure { reason } => {
                let mut inner = self.inner.lock();
                inner.state = WorkflowState::Error;
                inner.message = reason;
                return;
            }
        };

        let saved = self
            .artifact_repository
            .save(&archive, ARCHIVE_FILE_NAME)
            .await;

        let mut inner = self.inner.lock();
        match saved {
            Ok(path) => {
                inner.state = WorkflowState::Idle;
                inner.message = format!("Dataset saved to {}", path.display());
            }
            Err(e) => {
                inner.state = WorkflowState::Error;
                inner.message = format!("Failed to save dataset: {e}");
            }
        }
    }
}
