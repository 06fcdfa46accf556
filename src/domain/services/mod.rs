//! # Domain Services
//!
//! エンティティに属さないドメインロジック

pub mod date_normalizer;
