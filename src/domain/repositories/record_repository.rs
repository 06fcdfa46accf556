//! # Record Repository Trait
//!
//! タイムログの読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::domain::entities::time_log_record::TimeLogRecord;

/// レコードリポジトリ
///
/// タイムログのエクスポートファイルを読み込むリポジトリ
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// ファイルの全レコードを読み込む
    ///
    /// # Arguments
    ///
    /// * `file_path` - エクスポートファイルのパス
    ///
    /// # Returns
    ///
    /// ヘッダ行を除いたレコードのリスト（ファイル順）
    ///
    /// # Errors
    ///
    /// ファイルが読めない場合、または不正な行があった場合にエラーを返す
    async fn read_records(&self, file_path: &Path) -> Result<Vec<TimeLogRecord>>;
}
