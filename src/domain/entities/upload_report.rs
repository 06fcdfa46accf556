//! # UploadReport Value Object
//!
//! エントリごとのアップロード結果をまとめたバリューオブジェクト

use std::fmt;

/// 1エントリのアップロード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 2xx 応答
    Uploaded,
    /// 2xx 以外の応答（ステータスコード）
    Rejected(u16),
    /// リクエスト自体が失敗した
    Failed(String),
}

impl UploadOutcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded)
    }
}

impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadOutcome::Uploaded => write!(f, "uploaded"),
            UploadOutcome::Rejected(status) => write!(f, "rejected with status {}", status),
            UploadOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// エントリIDと結果の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryResult {
    pub id: String,
    pub outcome: UploadOutcome,
}

/// アップロード結果のサマリー
///
/// 入力順にエントリごとの結果を保持する
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    results: Vec<EntryResult>,
}

impl UploadReport {
    /// 空のレポートを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 結果を追加
    pub fn record(&mut self, id: impl Into<String>, outcome: UploadOutcome) {
        self.results.push(EntryResult {
            id: id.into(),
            outcome,
        });
    }

    /// 全結果への参照を返す
    pub fn results(&self) -> &[EntryResult] {
        &self.results
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// 成功したエントリの数
    pub fn uploaded_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_success()).count()
    }

    /// 失敗したエントリの数
    pub fn failed_count(&self) -> usize {
        self.len() - self.uploaded_count()
    }

    /// 失敗したエントリの結果
    pub fn failures(&self) -> impl Iterator<Item = &EntryResult> {
        self.results.iter().filter(|r| !r.outcome.is_success())
    }

    /// 全エントリが成功したかチェックします。
    ///
    /// # 例
    ///
    /// ```
    /// use teamwork_import::domain::entities::upload_report::{UploadOutcome, UploadReport};
    ///
    /// let mut report = UploadReport::new();
    /// report.record("1", UploadOutcome::Uploaded);
    /// assert!(report.is_success());
    ///
    /// report.record("2", UploadOutcome::Rejected(500));
    /// assert!(!report.is_success());
    /// ```
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}
