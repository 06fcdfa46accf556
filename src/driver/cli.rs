//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;

/// Teamwork のタイムログCSVを olmonoko にイベントとしてアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "teamwork-import")]
#[command(about = "Upload Teamwork time log exports to olmonoko as events", long_about = None)]
pub struct Args {
    /// Teamwork time log export (CSV)
    pub input: PathBuf,

    /// Dry run mode - map and print entries without uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long, default_value = "./teamwork-import.json")]
    pub config: String,

    /// olmonoko API base URL (overrides config)
    #[arg(long)]
    pub api_base: Option<String>,

    /// olmonoko session id (overrides config)
    #[arg(long)]
    pub session_id: Option<String>,
}
