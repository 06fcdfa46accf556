//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod csv_record_repository;
pub mod olmonoko_event_repository;
