//! olmonoko Event Form
//!
//! `POST /event/local` のフォームボディ

use serde::Serialize;

use crate::domain::entities::event_entry::EventEntry;

/// URLエンコードして送るフォーム
///
/// 終了日時（`ends_at`）は送らない。長さは `duration` で表す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventForm {
    pub summary: String,
    pub description: String,
    pub starts_at: String,
    pub starts_at_tz: i8,
    pub duration: u64,
    pub location: String,
    pub priority: u8,
    pub tags: String,
}

impl From<&EventEntry> for EventForm {
    fn from(entry: &EventEntry) -> Self {
        Self {
            summary: entry.summary.clone(),
            description: entry.description.clone(),
            starts_at: entry.starts_at.clone(),
            starts_at_tz: entry.starts_at_tz,
            duration: entry.duration,
            location: entry.location.clone(),
            priority: entry.priority,
            tags: entry.tags.clone(),
        }
    }
}
