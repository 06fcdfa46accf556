//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **TimeLogRecord**: CSV の1行
//! - **EventEntry**: アップロード対象のイベント
//! - **UploadReport**: エントリごとのアップロード結果

pub mod event_entry;
pub mod time_log_record;
pub mod upload_report;
