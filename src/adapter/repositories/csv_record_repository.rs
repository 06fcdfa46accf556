//! CSV Record Repository Implementation
//!
//! RecordRepositoryのCSVファイル実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecordsIntoIter};
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::adapter::config::expand_path;
use crate::domain::entities::time_log_record::TimeLogRecord;
use crate::domain::repositories::record_repository::RecordRepository;

/// CSVファイルベースのレコードリポジトリ
pub struct CsvRecordRepository;

/// レコードを1行ずつ返すイテレータ
///
/// ファイルはイテレータが破棄されるまで開いたままになる
pub struct CsvRecords {
    rows: StringRecordsIntoIter<File>,
}

impl Iterator for CsvRecords {
    type Item = Result<TimeLogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(Self::to_record(row))
    }
}

impl CsvRecords {
    fn to_record(row: csv::Result<csv::StringRecord>) -> Result<TimeLogRecord> {
        let row = row.context("Failed to read CSV row")?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let fields: Vec<&str> = row.iter().collect();
        Ok(TimeLogRecord::from_row(line, &fields)?)
    }
}

impl CsvRecordRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルを開いてレコードのイテレータを返す
    ///
    /// `~` はホームディレクトリに展開する。1行目はヘッダとして検証せずに
    /// 読み飛ばす。列数の異なる行も読み込み、列数不足は
    /// `TimeLogRecord::from_row` で検出する。空行は読み飛ばされる。
    pub fn records(file_path: &Path) -> Result<CsvRecords> {
        let path = expand_path(&file_path.to_string_lossy());
        let reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_path(&path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

        Ok(CsvRecords {
            rows: reader.into_records(),
        })
    }

    /// 全レコードを読み込む（内部実装）
    fn read_records_internal(file_path: &Path) -> Result<Vec<TimeLogRecord>> {
        let records = Self::records(file_path)?.collect::<Result<Vec<_>>>()?;

        debug!("Parsed {} rows from {}", records.len(), file_path.display());

        Ok(records)
    }
}

#[async_trait]
impl RecordRepository for CsvRecordRepository {
    async fn read_records(&self, file_path: &Path) -> Result<Vec<TimeLogRecord>> {
        // ブロッキングI/Oなので、tokio::task::spawn_blockingでラップ
        let file_path: PathBuf = file_path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_records_internal(&file_path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for CsvRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}
