//! olmonoko Adapter Modules
//!
//! olmonoko イベントAPIとの統合

pub mod client;
pub mod form;
