//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{bail, Result};
use log::info;

use std::sync::Arc;

use crate::adapter::assets;
use crate::adapter::config::Config;
use crate::adapter::http::client::ApiClient;
use crate::adapter::repositories::file_artifact_repository::FileArtifactRepository;
use crate::adapter::repositories::http_download_repository::HttpDownloadRepository;
use crate::adapter::repositories::http_generation_repository::HttpGenerationRepository;
use crate::adapter::repositories::http_upload_repository::HttpUploadRepository;
use crate::application::coordinator::WorkflowCoordinator;
use crate::domain::entities::workflow_state::WorkflowState;

use super::cli::{Args, Command};

/// 実リポジトリで構成したコーディネータ
type HttpCoordinator = WorkflowCoordinator<
    HttpUploadRepository,
    HttpGenerationRepository,
    HttpDownloadRepository,
    FileArtifactRepository,
>;

/// Dataset Generation Workflow
pub struct DatasetWorkflow {
    config: Config,
    coordinator: HttpCoordinator,
}

impl DatasetWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config)?;

        // Repository implementations
        let upload_repo = Arc::new(HttpUploadRepository::new(api.clone()));
        let generation_repo = Arc::new(HttpGenerationRepository::new(api.clone()));
        let download_repo = Arc::new(HttpDownloadRepository::new(api));
        let artifact_repo = Arc::new(FileArtifactRepository::new(config.output_dir.clone()));

        let coordinator = WorkflowCoordinator::new(
            upload_repo,
            generation_repo,
            download_repo,
            artifact_repo,
        );

        Ok(Self {
            config,
            coordinator,
        })
    }

    /// Execute one workflow stage chosen on the command line
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting dataset workflow...");

        println!("✓ Using service at {}", self.config.base_url);

        match args.command {
            Command::Upload { video, references } => {
                let video = assets::load_video_asset(&video)?;
                let references = assets::load_reference_images(&references)?;
                println!(
                    "✓ Loaded video and {} reference images",
                    references.len()
                );

                self.coordinator.select_video(video);
                self.coordinator.select_references(references);
                self.coordinator.request_upload().await;
            }
            Command::Generate => {
                self.coordinator.request_generation().await;
            }
            Command::Download => {
                self.coordinator.request_download().await;
            }
        }

        let message = self.coordinator.message();
        if self.coordinator.state() == WorkflowState::Error {
            bail!(message);
        }

        println!("✓ {}", message);

        Ok(())
    }
}
