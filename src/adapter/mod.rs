//! Adapter Layer
//!
//! 外部システム（olmonoko API, ファイルシステム）との統合

pub mod config;
pub mod olmonoko;
pub mod repositories;
