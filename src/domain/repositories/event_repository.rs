//! # Event Repository Trait
//!
//! イベントの送信を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::event_entry::EventEntry;
use crate::domain::entities::upload_report::UploadOutcome;

/// イベントリポジトリ
///
/// イベントを1件ずつリモートサービスに送信するリポジトリ
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// イベントを1件送信
    ///
    /// # Returns
    ///
    /// 応答ステータスに応じて `Uploaded` または `Rejected`
    ///
    /// # Errors
    ///
    /// リクエストを送れなかった場合にエラーを返す
    async fn submit(&self, entry: &EventEntry) -> Result<UploadOutcome>;
}
