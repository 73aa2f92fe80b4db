//! CLI Argument Parsing
//!
//! CLIの引数解析

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// データセット生成サービスを操作するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "dsgen")]
#[command(
    about = "Upload assets and retrieve generated datasets from the dataset service",
    long_about = None
)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./.dsgen/config.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

/// 実行するワークフロー段階
///
/// 3つの段階は自動では連結されず、それぞれ明示的な呼び出しで開始する
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Upload a video and reference images
    Upload {
        /// Video file path
        #[arg(long)]
        video: PathBuf,

        /// Reference image paths (order is preserved)
        #[arg(long, num_args = 1.., required = true)]
        references: Vec<PathBuf>,
    },
    /// Trigger dataset generation on the server
    Generate,
    /// Download the generated dataset archive
    Download,
}
