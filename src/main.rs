//! Dsgen - Dataset Generation Client
//!
//! 動画と参照画像をデータセット生成サービスへアップロードし、
//! 生成結果のアーカイブを取得する

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use dsgen::adapter::config::Config;
use dsgen::driver::{Args, DatasetWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = DatasetWorkflow::new(config)?;

    workflow.execute(args).await
}
