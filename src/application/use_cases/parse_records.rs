//! # Parse Records Use Case
//!
//! タイムログ読み込みユースケース

use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::time_log_record::TimeLogRecord;
use crate::domain::repositories::record_repository::RecordRepository;

/// タイムログ読み込みユースケース
pub struct ParseRecordsUseCase<R: RecordRepository> {
    record_repository: Arc<R>,
}

impl<R: RecordRepository> ParseRecordsUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(record_repository: Arc<R>) -> Self {
        Self { record_repository }
    }

    /// ファイルの全レコードを読み込む
    ///
    /// # Errors
    ///
    /// 読み込みに失敗した場合にエラーを返す（部分的な結果は返さない）
    pub async fn execute(&self, file_path: &Path) -> Result<Vec<TimeLogRecord>> {
        let records = self
            .record_repository
            .read_records(file_path)
            .await
            .with_context(|| format!("Failed to read time logs from {}", file_path.display()))?;

        if records.is_empty() {
            warn!("No time log rows found in {}", file_path.display());
        } else {
            info!(
                "Read {} time log rows from {}",
                records.len(),
                file_path.display()
            );
        }

        Ok(records)
    }
}
