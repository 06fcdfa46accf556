//! # Domain Errors
//!
//! インポート処理のエラー定義

use thiserror::Error;

/// インポート処理で発生するドメインエラー
///
/// いずれも致命的エラーとして扱われ、実行全体を中断する。
/// アップロード時の個別エラーはここには含まれない（`UploadOutcome` を参照）。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Malformed row at line {row}: expected at least 18 columns, found {columns}")]
    MalformedRow { row: u64, columns: usize },

    #[error("Invalid date (expected DD/MM/YYYY): {0:?}")]
    InvalidDate(String),

    #[error("Invalid date-time (expected \"DD/MM/YYYY HH:MM\"): {0:?}")]
    InvalidDateTime(String),

    #[error("Invalid time of day (expected HH:MM): {0:?}")]
    InvalidTime(String),

    #[error("Invalid number in field '{field}': {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
