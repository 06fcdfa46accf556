//! olmonoko Event Repository Implementation
//!
//! EventRepositoryのolmonoko HTTP実装

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::olmonoko::client::EventPoster;
use crate::adapter::olmonoko::form::EventForm;
use crate::domain::entities::event_entry::EventEntry;
use crate::domain::entities::upload_report::UploadOutcome;
use crate::domain::repositories::event_repository::EventRepository;

/// olmonokoイベントリポジトリ
pub struct OlmonokoEventRepository {
    poster: Arc<dyn EventPoster>,
    endpoint: String,
    session_id: String,
}

impl OlmonokoEventRepository {
    /// 新しいリポジトリを作成
    ///
    /// `config` は検証済みであること
    pub fn new(poster: Arc<dyn EventPoster>, config: &Config) -> Self {
        Self {
            poster,
            endpoint: config.event_endpoint(),
            session_id: config.session_id.clone(),
        }
    }

    /// ステータスコードを結果に変換（2xxのみ成功）
    ///
    /// リダイレクト追跡後に残った3xxも失敗として扱う
    pub fn outcome_for_status(status: u16) -> UploadOutcome {
        if (200..300).contains(&status) {
            UploadOutcome::Uploaded
        } else {
            UploadOutcome::Rejected(status)
        }
    }
}

#[async_trait]
impl EventRepository for OlmonokoEventRepository {
    async fn submit(&self, entry: &EventEntry) -> Result<UploadOutcome> {
        let form = EventForm::from(entry);
        let status = self
            .poster
            .post_form(&self.endpoint, &self.session_id, &form)
            .await?;

        debug!("POST {} for entry {} -> {}", self.endpoint, entry.id, status);

        Ok(Self::outcome_for_status(status))
    }
}
