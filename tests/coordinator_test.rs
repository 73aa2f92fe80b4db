//! Coordinator Integration Tests
//!
//! WorkflowCoordinator のエンドツーエンドシナリオテスト

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use dsgen::application::coordinator::{WorkflowCoordinator, ARCHIVE_FILE_NAME};
use dsgen::domain::entities::assets::{ReferenceImage, ReferenceImageSet, VideoAsset};
use dsgen::domain::entities::workflow_state::WorkflowState;
use dsgen::domain::repositories::artifact_repository::ArtifactRepository;
use dsgen::domain::repositories::download_repository::{DownloadOutcome, DownloadRepository};
use dsgen::domain::repositories::generation_repository::{GenerationRepository, TriggerOutcome};
use dsgen::domain::repositories::upload_repository::{UploadOutcome, UploadRepository};

/// 固定の結果を返し、呼び出し回数を記録するアップロードリポジトリ
struct StubUploadRepository {
    outcome: UploadOutcome,
    calls: Mutex<u32>,
}

impl StubUploadRepository {
    fn new(outcome: UploadOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(0),
        }
    }

    fn call_count(&self) -> u32 {
        *self.calls.lock()
    }
}

#[async_trait]
impl UploadRepository for StubUploadRepository {
    async fn upload(&self, _video: &VideoAsset, _references: &ReferenceImageSet) -> UploadOutcome {
        *self.calls.lock() += 1;
        self.outcome.clone()
    }
}

/// 固定の結果を返す生成リポジトリ
struct StubGenerationRepository {
    outcome: TriggerOutcome,
}

#[async_trait]
impl GenerationRepository for StubGenerationRepository {
    async fn trigger(&self) -> TriggerOutcome {
        self.outcome.clone()
    }
}

/// 固定の結果を返すダウンロードリポジトリ
struct StubDownloadRepository {
    outcome: DownloadOutcome,
}

#[async_trait]
impl DownloadRepository for StubDownloadRepository {
    async fn download(&self) -> DownloadOutcome {
        self.outcome.clone()
    }
}

/// 保存されたバイト列とファイル名を記録するアーティファクトリポジトリ
#[derive(Default)]
struct RecordingArtifactRepository {
    saved: Mutex<Option<(Vec<u8>, String)>>,
}

impl RecordingArtifactRepository {
    fn saved(&self) -> Option<(Vec<u8>, String)> {
        self.saved.lock().clone()
    }
}

#[async_trait]
impl ArtifactRepository for RecordingArtifactRepository {
    async fn save(&self, bytes: &[u8], file_name: &str) -> Result<PathBuf> {
        *self.saved.lock() = Some((bytes.to_vec(), file_name.to_string()));
        Ok(PathBuf::from("output").join(file_name))
    }
}

fn unused_generation() -> Arc<StubGenerationRepository> {
    Arc::new(StubGenerationRepository {
        outcome: TriggerOutcome::Failure {
            reason: "unexpected trigger call".to_string(),
        },
    })
}

fn unused_download() -> Arc<StubDownloadRepository> {
    Arc::new(StubDownloadRepository {
        outcome: DownloadOutcome::Failure {
            reason: "unexpected download call".to_string(),
        },
    })
}

fn unused_upload() -> Arc<StubUploadRepository> {
    Arc::new(StubUploadRepository::new(UploadOutcome::Failure {
        reason: "unexpected upload call".to_string(),
    }))
}

/// シナリオA: 動画と参照画像2枚を選択してアップロード成功
#[tokio::test]
async fn test_scenario_upload_success() {
    let upload = Arc::new(StubUploadRepository::new(UploadOutcome::Success {
        message: "Upload successful".to_string(),
    }));
    let coordinator = WorkflowCoordinator::new(
        upload.clone(),
        unused_generation(),
        unused_download(),
        Arc::new(RecordingArtifactRepository::default()),
    );

    coordinator.select_video(VideoAsset::new("v.mp4", vec![1, 2, 3]));
    coordinator.select_references(ReferenceImageSet::new(vec![
        ReferenceImage::new("ref1.png", vec![4]),
        ReferenceImage::new("ref2.png", vec![5]),
    ]));

    coordinator.request_upload().await;

    assert_eq!(coordinator.state(), WorkflowState::Idle);
    assert_eq!(coordinator.message(), "Upload successful");
    assert_eq!(upload.call_count(), 1);
}

/// シナリオB: 動画未選択ではネットワーク呼び出しが発生しない
#[tokio::test]
async fn test_scenario_upload_without_video() {
    let upload = Arc::new(StubUploadRepository::new(UploadOutcome::Success {
        message: "should not be reached".to_string(),
    }));
    let coordinator = WorkflowCoordinator::new(
        upload.clone(),
        unused_generation(),
        unused_download(),
        Arc::new(RecordingArtifactRepository::default()),
    );

    coordinator.select_references(ReferenceImageSet::new(vec![ReferenceImage::new(
        "ref1.png",
        vec![1],
    )]));

    coordinator.request_upload().await;

    assert_eq!(coordinator.state(), WorkflowState::Idle);
    assert_eq!(
        coordinator.message(),
        "Please upload both video and reference images."
    );
    assert_eq!(upload.call_count(), 0);
}

/// シナリオC: 生成トリガーがサーバーエラーで失敗
#[tokio::test]
async fn test_scenario_generation_server_error() {
    let coordinator = WorkflowCoordinator::new(
        unused_upload(),
        Arc::new(StubGenerationRepository {
            outcome: TriggerOutcome::Failure {
                reason: "Processing failed!".to_string(),
            },
        }),
        unused_download(),
        Arc::new(RecordingArtifactRepository::default()),
    );

    coordinator.request_generation().await;

    assert_eq!(coordinator.state(), WorkflowState::Error);
    assert_eq!(coordinator.message(), "Processing failed!");
}

/// シナリオD: ダウンロード成功でアーカイブが保存される
#[tokio::test]
async fn test_scenario_download_saves_archive() {
    let artifact = Arc::new(RecordingArtifactRepository::default());
    let coordinator = WorkflowCoordinator::new(
        unused_upload(),
        unused_generation(),
        Arc::new(StubDownloadRepository {
            outcome: DownloadOutcome::Success {
                archive: vec![0x50, 0x4b, 0x03, 0x04],
            },
        }),
        artifact.clone(),
    );

    coordinator.request_download().await;

    assert_eq!(coordinator.state(), WorkflowState::Idle);
    assert_eq!(
        coordinator.message(),
        format!("Dataset saved to {}", PathBuf::from("output").join("datasets.zip").display())
    );

    let (bytes, file_name) = artifact.saved().expect("artifact should be saved");
    assert_eq!(bytes, vec![0x50, 0x4b, 0x03, 0x04]);
    assert_eq!(file_name, ARCHIVE_FILE_NAME);
}

/// 生成受理後は Idle に戻り「処理中」メッセージが表示される
#[tokio::test]
async fn test_generation_accepted_reports_in_progress() {
    let coordinator = WorkflowCoordinator::new(
        unused_upload(),
        Arc::new(StubGenerationRepository {
            outcome: TriggerOutcome::Accepted {
                message: "Generating Dataset. It'll take some time....".to_string(),
            },
        }),
        unused_download(),
        Arc::new(RecordingArtifactRepository::default()),
    );

    coordinator.request_generation().await;

    assert_eq!(coordinator.state(), WorkflowState::Idle);
    assert_eq!(
        coordinator.message(),
        "Generating Dataset. It'll take some time...."
    );
}

/// エラー状態からの再操作が許可される（Errorは終端ではない）
#[tokio::test]
async fn test_error_state_allows_retry() {
    let coordinator = WorkflowCoordinator::new(
        unused_upload(),
        Arc::new(StubGenerationRepository {
            outcome: TriggerOutcome::Accepted {
                message: "Generating Dataset. It'll take some time....".to_string(),
            },
        }),
        Arc::new(StubDownloadRepository {
            outcome: DownloadOutcome::Failure {
                reason: "Failed to download dataset.".to_string(),
            },
        }),
        Arc::new(RecordingArtifactRepository::default()),
    );

    coordinator.request_download().await;
    assert_eq!(coordinator.state(), WorkflowState::Error);

    coordinator.request_generation().await;
    assert_eq!(coordinator.state(), WorkflowState::Idle);
}
