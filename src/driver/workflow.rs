//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::olmonoko::client::{EventPoster, ReqwestEventPoster};
use crate::adapter::repositories::csv_record_repository::CsvRecordRepository;
use crate::adapter::repositories::olmonoko_event_repository::OlmonokoEventRepository;
use crate::application::use_cases::map_entries::MapEntriesUseCase;
use crate::application::use_cases::parse_records::ParseRecordsUseCase;
use crate::application::use_cases::upload_entries::UploadEntriesUseCase;
use crate::domain::entities::event_entry::EventEntry;
use crate::domain::entities::upload_report::UploadReport;

use super::cli::Args;

/// Format one entry for dry-run output
pub fn describe_entry(entry: &EventEntry) -> String {
    format!(
        "{} | {} | starts {} (UTC{:+}) | {}s | {} | tags: {}",
        entry.id,
        entry.summary,
        entry.starts_at,
        entry.starts_at_tz,
        entry.duration,
        entry.location,
        entry.tags
    )
}

/// Teamwork Import Workflow
pub struct ImportWorkflow {
    config: Config,
    parse_use_case: ParseRecordsUseCase<CsvRecordRepository>,
    map_use_case: MapEntriesUseCase,
    poster: Option<Arc<dyn EventPoster>>,
}

impl ImportWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        Self::build(config, None)
    }

    /// Create a workflow that posts through the given client
    pub fn with_poster(config: Config, poster: Arc<dyn EventPoster>) -> Self {
        Self::build(config, Some(poster))
    }

    fn build(config: Config, poster: Option<Arc<dyn EventPoster>>) -> Self {
        let record_repo = Arc::new(CsvRecordRepository::new());
        let parse_use_case = ParseRecordsUseCase::new(record_repo);
        let map_use_case = MapEntriesUseCase::new(config.entry_options());

        Self {
            config,
            parse_use_case,
            map_use_case,
            poster,
        }
    }

    /// Execute the import workflow
    ///
    /// Returns `None` in dry-run mode
    pub async fn execute(&self, args: &Args) -> Result<Option<UploadReport>> {
        info!("Starting Teamwork import...");
        info!("Dry run: {}", args.dry_run);

        // アップロード前に設定を検証（dry-runでは不要）
        if !args.dry_run {
            self.config.validate()?;
            println!("✓ Using olmonoko API: {}", self.config.api_base);
        }

        // 全レコードを読み込み、全件を先に変換してからアップロードする
        let records = self.parse_use_case.execute(&args.input).await?;
        println!(
            "✓ Read {} time logs from {}",
            records.len(),
            args.input.display()
        );

        if records.is_empty() {
            println!("No time logs to import. Exiting.");
            return Ok(if args.dry_run {
                None
            } else {
                Some(UploadReport::new())
            });
        }

        let entries = self.map_use_case.execute(&records)?;
        println!("✓ Mapped {} entries", entries.len());

        if args.dry_run {
            println!("✓ Dry-run mode (not actually uploading)");
            println!("  Would upload {} entries:", entries.len());
            for entry in &entries {
                println!("    - {}", describe_entry(entry));
            }
            return Ok(None);
        }

        let poster: Arc<dyn EventPoster> = match &self.poster {
            Some(poster) => poster.clone(),
            None => Arc::new(ReqwestEventPoster::new()?),
        };
        let event_repo = Arc::new(OlmonokoEventRepository::new(poster, &self.config));
        let upload_use_case = UploadEntriesUseCase::new(event_repo);

        let report = upload_use_case.execute(&entries).await;

        println!(
            "✓ Uploaded {} entries ({} failed)",
            report.uploaded_count(),
            report.failed_count()
        );
        for failure in report.failures() {
            println!("  ✗ {}: {}", failure.id, failure.outcome);
        }

        Ok(Some(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_entry() {
        let entry = EventEntry {
            id: "1001".to_string(),
            summary: "Website 1001".to_string(),
            description: "Fix header".to_string(),
            starts_at: "2024-04-29T16:11".to_string(),
            starts_at_tz: 3,
            duration: 5400,
            location: "Acme Oy".to_string(),
            priority: 9,
            tags: "work,teamwork,tw::project::Website".to_string(),
        };

        assert_eq!(
            describe_entry(&entry),
            "1001 | Website 1001 | starts 2024-04-29T16:11 (UTC+3) | 5400s | Acme Oy | tags: work,teamwork,tw::project::Website"
        );
    }

    #[tokio::test]
    async fn test_execute_rejects_invalid_config_before_reading() {
        let workflow = ImportWorkflow::new(Config::default());
        let args = Args {
            input: "/nonexistent/export.csv".into(),
            dry_run: false,
            config: "./teamwork-import.json".to_string(),
            api_base: None,
            session_id: None,
        };

        let err = workflow.execute(&args).await.unwrap_err();
        assert!(err.to_string().contains("api_base is not set"));
    }
}
