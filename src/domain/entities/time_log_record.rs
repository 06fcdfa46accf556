//! # TimeLogRecord Entity
//!
//! Teamwork のタイムログ CSV の1行を表すエンティティ

use crate::domain::errors::ImportError;

/// 1行に必要な列数
pub const COLUMN_COUNT: usize = 18;

/// タイムログのレコード
///
/// CSV の列順に対応する。値は読み込んだままの文字列で保持し、
/// 数値への変換は Entry Mapper が必要な時点で行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLogRecord {
    pub id: String,
    pub date: String,
    /// 開始日時（`29/04/2024 16:11` 形式）
    pub date_time: String,
    /// 終了日時（マッピングでは使用しない）
    pub end_date_time: String,
    pub project: String,
    pub who: String,
    pub description: String,
    pub project_category: String,
    pub company: String,
    pub task_list: String,
    pub task: String,
    pub parent_task: String,
    pub is_sub_task: String,
    pub is_billable: String,
    pub invoice_number: String,
    pub hours: String,
    pub minutes: String,
    pub hours_decimal: String,
}

impl TimeLogRecord {
    /// CSV の1行からレコードを作成
    ///
    /// # Arguments
    ///
    /// * `row` - ファイル内の行番号（1始まり、エラー表示用）
    /// * `fields` - 行の各列
    ///
    /// # Errors
    ///
    /// 列数が18未満の場合に `ImportError::MalformedRow` を返す。
    /// 19列目以降は無視する。
    pub fn from_row<S: AsRef<str>>(row: u64, fields: &[S]) -> Result<Self, ImportError> {
        if fields.len() < COLUMN_COUNT {
            return Err(ImportError::MalformedRow {
                row,
                columns: fields.len(),
            });
        }

        let col = |i: usize| fields[i].as_ref().to_string();

        Ok(Self {
            id: col(0),
            date: col(1),
            date_time: col(2),
            end_date_time: col(3),
            project: col(4),
            who: col(5),
            description: col(6),
            project_category: col(7),
            company: col(8),
            task_list: col(9),
            task: col(10),
            parent_task: col(11),
            is_sub_task: col(12),
            is_billable: col(13),
            invoice_number: col(14),
            hours: col(15),
            minutes: col(16),
            hours_decimal: col(17),
        })
    }
}
