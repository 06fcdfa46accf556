//! # EventEntry Entity
//!
//! olmonoko にアップロードするイベントのドメインエンティティ

use crate::domain::entities::time_log_record::TimeLogRecord;
use crate::domain::errors::ImportError;
use crate::domain::services::date_normalizer::csv_datetime_to_starts_at;

/// 全エントリに付与される固定タグ
pub const STATIC_TAGS: &str = "work,teamwork";

/// プロジェクトタグの接頭辞
pub const PROJECT_TAG_PREFIX: &str = "tw::project::";

/// デフォルトのタイムゾーンオフセット（時間）
pub const DEFAULT_STARTS_AT_TZ: i8 = 3;

/// デフォルトの優先度
pub const DEFAULT_PRIORITY: u8 = 9;

/// マッピング時に全エントリ共通で使う値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryOptions {
    /// UTC からのオフセット（時間）
    pub starts_at_tz: i8,
    pub priority: u8,
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self {
            starts_at_tz: DEFAULT_STARTS_AT_TZ,
            priority: DEFAULT_PRIORITY,
        }
    }
}

/// アップロード対象のイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    pub id: String,
    pub summary: String,
    pub description: String,
    /// `YYYY-MM-DDTHH:MM`（タイムゾーンなし）
    pub starts_at: String,
    pub starts_at_tz: i8,
    /// 秒数
    pub duration: u64,
    pub location: String,
    pub priority: u8,
    /// カンマ区切りのタグ
    pub tags: String,
}

impl EventEntry {
    /// タイムログのレコードからイベントを作成します。
    ///
    /// # Errors
    ///
    /// 開始日時の書式が不正な場合、または時間・分が数値でない場合に
    /// エラーを返す。数値でない値を0として扱うことはない。
    ///
    /// # 例
    ///
    /// ```
    /// use teamwork_import::domain::entities::event_entry::{EntryOptions, EventEntry};
    /// use teamwork_import::domain::entities::time_log_record::TimeLogRecord;
    ///
    /// let mut row = vec![""; 18];
    /// row[0] = "42";
    /// row[2] = "29/04/2024 16:11";
    /// row[4] = "Website";
    /// row[15] = "2";
    /// row[16] = "15";
    /// let record = TimeLogRecord::from_row(2, &row).unwrap();
    ///
    /// let entry = EventEntry::from_record(&record, EntryOptions::default()).unwrap();
    /// assert_eq!(entry.summary, "Website 42");
    /// assert_eq!(entry.starts_at, "2024-04-29T16:11");
    /// assert_eq!(entry.duration, 2 * 3600 + 15 * 60);
    /// ```
    pub fn from_record(record: &TimeLogRecord, options: EntryOptions) -> Result<Self, ImportError> {
        let starts_at = csv_datetime_to_starts_at(&record.date_time)?;

        let hours = parse_count("hours", &record.hours)?;
        let minutes = parse_count("minutes", &record.minutes)?;
        let hour_seconds = hours
            .checked_mul(3600)
            .ok_or_else(|| ImportError::InvalidNumber {
                field: "hours",
                value: record.hours.clone(),
            })?;
        let duration = minutes
            .checked_mul(60)
            .and_then(|m| hour_seconds.checked_add(m))
            .ok_or_else(|| ImportError::InvalidNumber {
                field: "minutes",
                value: record.minutes.clone(),
            })?;

        Ok(Self {
            id: record.id.clone(),
            summary: format!("{} {}", record.project, record.id),
            description: record.description.clone(),
            starts_at,
            starts_at_tz: options.starts_at_tz,
            duration,
            location: record.company.clone(),
            priority: options.priority,
            tags: project_tags(&record.project),
        })
    }
}

/// プロジェクト名からタグ文字列を組み立てる
///
/// プロジェクト名はエスケープしないため、カンマを含む場合はタグが分割される。
pub fn project_tags(project: &str) -> String {
    format!("{},{}{}", STATIC_TAGS, PROJECT_TAG_PREFIX, project)
}

fn parse_count(field: &'static str, value: &str) -> Result<u64, ImportError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ImportError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
