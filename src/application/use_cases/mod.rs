//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ParseRecordsUseCase**: エクスポートファイルの読み込み
//! - **MapEntriesUseCase**: レコードからイベントへの変換
//! - **UploadEntriesUseCase**: イベントのアップロード

pub mod map_entries;
pub mod parse_records;
pub mod upload_entries;
