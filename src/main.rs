//! teamwork-import - Teamwork Time Log Importer
//!
//! Teamwork のタイムログCSVを olmonoko にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use teamwork_import::adapter::config::Config;
use teamwork_import::driver::{Args, ImportWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration, CLI flags take precedence
    let config = Config::load_or_default(&args.config)?
        .with_overrides(args.api_base.clone(), args.session_id.clone());

    // Create workflow with injected dependencies
    let workflow = ImportWorkflow::new(config);

    workflow.execute(&args).await?;

    Ok(())
}
