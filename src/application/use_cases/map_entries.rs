//! # Map Entries Use Case
//!
//! レコードからイベントへの変換ユースケース

use anyhow::{Context, Result};
use log::info;

use crate::domain::entities::event_entry::{EntryOptions, EventEntry};
use crate::domain::entities::time_log_record::TimeLogRecord;

/// レコードからイベントへの変換ユースケース
///
/// 全レコードを先にまとめて変換する。1件でも変換できなければ
/// アップロード前に全体を中断する。
pub struct MapEntriesUseCase {
    options: EntryOptions,
}

impl MapEntriesUseCase {
    pub fn new(options: EntryOptions) -> Self {
        Self { options }
    }

    /// 全レコードを変換
    ///
    /// # Errors
    ///
    /// 最初に変換できなかったレコードのIDを含むエラーを返す
    pub fn execute(&self, records: &[TimeLogRecord]) -> Result<Vec<EventEntry>> {
        let entries = records
            .iter()
            .map(|record| {
                EventEntry::from_record(record, self.options)
                    .with_context(|| format!("Failed to map time log {}", record.id))
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Mapped {} time logs to events", entries.len());

        Ok(entries)
    }
}
