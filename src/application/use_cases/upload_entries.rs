//! # Upload Entries Use Case
//!
//! イベントアップロードユースケース

use log::{error, info};
use std::sync::Arc;

use crate::domain::entities::event_entry::EventEntry;
use crate::domain::entities::upload_report::{UploadOutcome, UploadReport};
use crate::domain::repositories::event_repository::EventRepository;

/// イベントアップロードユースケース
///
/// イベントを入力順に1件ずつ送信する。あるエントリの失敗は記録して
/// 次のエントリへ進み、バッチ全体は中断しない。
pub struct UploadEntriesUseCase<E: EventRepository> {
    event_repository: Arc<E>,
}

impl<E: EventRepository> UploadEntriesUseCase<E> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `event_repository` - イベントリポジトリ
    pub fn new(event_repository: Arc<E>) -> Self {
        Self { event_repository }
    }

    /// 全エントリをアップロード
    ///
    /// # Returns
    ///
    /// エントリごとの結果を入力順に並べたレポート
    pub async fn execute(&self, entries: &[EventEntry]) -> UploadReport {
        let mut report = UploadReport::new();

        for entry in entries {
            info!("Uploading entry {}", entry.id);

            let outcome = match self.event_repository.submit(entry).await {
                Ok(outcome) => outcome,
                Err(e) => UploadOutcome::Failed(format!("{:#}", e)),
            };

            if !outcome.is_success() {
                error!("Entry {}: {}", entry.id, outcome);
            }

            report.record(entry.id.clone(), outcome);
        }

        info!(
            "Upload finished: {} uploaded, {} failed",
            report.uploaded_count(),
            report.failed_count()
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;
    use std::sync::{Mutex, Once};

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// 現在のスレッドのログを記録するロガー
    struct RecordingLogger;

    impl Log for RecordingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            CAPTURED.with(|c| {
                c.borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: RecordingLogger = RecordingLogger;
    static INIT: Once = Once::new();

    fn start_capture() {
        INIT.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Trace);
        });
        CAPTURED.with(|c| c.borrow_mut().clear());
    }

    fn captured_errors() -> Vec<String> {
        CAPTURED.with(|c| {
            c.borrow()
                .iter()
                .filter(|(level, _)| *level == Level::Error)
                .map(|(_, message)| message.clone())
                .collect()
        })
    }

    /// IDごとに応答を決めるモック
    struct MockEventRepository {
        rejected: Vec<(&'static str, u16)>,
        unreachable: Vec<&'static str>,
        submitted: Mutex<Vec<String>>,
    }

    impl MockEventRepository {
        fn new() -> Self {
            Self {
                rejected: vec![],
                unreachable: vec![],
                submitted: Mutex::new(vec![]),
            }
        }

        fn submitted(&self) -> Vec<String> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventRepository for MockEventRepository {
        async fn submit(&self, entry: &EventEntry) -> Result<UploadOutcome> {
            self.submitted.lock().unwrap().push(entry.id.clone());

            if self.unreachable.iter().any(|id| *id == entry.id) {
                anyhow::bail!("connection refused");
            }

            match self.rejected.iter().find(|(id, _)| *id == entry.id) {
                Some((_, status)) => Ok(UploadOutcome::Rejected(*status)),
                None => Ok(UploadOutcome::Uploaded),
            }
        }
    }

    fn create_test_entry(id: &str) -> EventEntry {
        EventEntry {
            id: id.to_string(),
            summary: format!("Website {}", id),
            description: "Fix header".to_string(),
            starts_at: "2024-04-29T16:11".to_string(),
            starts_at_tz: 3,
            duration: 3600,
            location: "Acme Oy".to_string(),
            priority: 9,
            tags: "work,teamwork,tw::project::Website".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upload_entries_all_success() {
        let repo = Arc::new(MockEventRepository::new());
        let use_case = UploadEntriesUseCase::new(repo.clone());

        let entries = vec![create_test_entry("1"), create_test_entry("2")];
        let report = use_case.execute(&entries).await;

        assert_eq!(report.uploaded_count(), 2);
        assert_eq!(report.failed_count(), 0);
        assert_eq!(repo.submitted(), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_upload_entries_continues_after_rejection() {
        let mut mock = MockEventRepository::new();
        mock.rejected = vec![("2", 500)];
        let repo = Arc::new(mock);
        let use_case = UploadEntriesUseCase::new(repo.clone());

        let entries = vec![
            create_test_entry("1"),
            create_test_entry("2"),
            create_test_entry("3"),
            create_test_entry("4"),
        ];
        let report = use_case.execute(&entries).await;

        // 2件目の失敗後も3件目以降を送信している
        assert_eq!(repo.submitted(), vec!["1", "2", "3", "4"]);
        assert_eq!(report.len(), 4);
        assert_eq!(report.uploaded_count(), 3);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.results()[1].outcome, UploadOutcome::Rejected(500));
    }

    #[tokio::test]
    async fn test_upload_entries_transport_error_is_isolated() {
        let mut mock = MockEventRepository::new();
        mock.unreachable = vec!["1"];
        mock.rejected = vec![("3", 401)];
        let repo = Arc::new(mock);
        let use_case = UploadEntriesUseCase::new(repo.clone());

        let entries = vec![
            create_test_entry("1"),
            create_test_entry("2"),
            create_test_entry("3"),
        ];
        let report = use_case.execute(&entries).await;

        assert_eq!(repo.submitted().len(), 3);
        assert_eq!(report.failed_count(), 2);

        let failed: Vec<&str> = report.failures().map(|r| r.id.as_str()).collect();
        assert_eq!(failed, vec!["1", "3"]);
        assert!(matches!(
            &report.results()[0].outcome,
            UploadOutcome::Failed(msg) if msg.contains("connection refused")
        ));
    }

    #[tokio::test]
    async fn test_upload_entries_logs_one_error_per_failure() {
        start_capture();

        let mut mock = MockEventRepository::new();
        mock.rejected = vec![("2", 500)];
        mock.unreachable = vec!["4"];
        let use_case = UploadEntriesUseCase::new(Arc::new(mock));

        let entries = vec![
            create_test_entry("1"),
            create_test_entry("2"),
            create_test_entry("3"),
            create_test_entry("4"),
        ];
        let report = use_case.execute(&entries).await;
        let errors = captured_errors();

        assert_eq!(report.failed_count(), 2);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("Entry 2:"));
        assert!(errors[1].starts_with("Entry 4:"));
    }

    #[tokio::test]
    async fn test_upload_entries_empty() {
        let repo = Arc::new(MockEventRepository::new());
        let use_case = UploadEntriesUseCase::new(repo.clone());

        let report = use_case.execute(&[]).await;

        assert!(report.is_empty());
        assert!(repo.submitted().is_empty());
    }
}
