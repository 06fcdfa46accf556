//! Configuration
//!
//! JSON設定ファイルの読み込みと検証

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::entities::event_entry::{EntryOptions, DEFAULT_PRIORITY, DEFAULT_STARTS_AT_TZ};
use crate::domain::errors::ImportError;

/// イベント作成APIのパス（`api_base` からの相対）
pub const EVENT_PATH: &str = "/event/local";

/// Expands tilde in path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// 例: `https://olmonoko.ruta.fi/api`
    #[serde(default)]
    pub api_base: String,

    /// olmonoko のログインセッションID（Cookie `session_id`）
    #[serde(default)]
    pub session_id: String,

    #[serde(default = "default_starts_at_tz")]
    pub starts_at_tz: i8,

    #[serde(default = "default_priority")]
    pub priority: u8,
}

fn default_starts_at_tz() -> i8 {
    DEFAULT_STARTS_AT_TZ
}

fn default_priority() -> u8 {
    DEFAULT_PRIORITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            session_id: String::new(),
            starts_at_tz: DEFAULT_STARTS_AT_TZ,
            priority: DEFAULT_PRIORITY,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let path = expand_path(path);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// ファイルがなければデフォルト設定を返す
    ///
    /// CLIフラグだけで必須項目を指定できるようにするため
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !expand_path(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// CLIで指定された値で上書きする
    pub fn with_overrides(mut self, api_base: Option<String>, session_id: Option<String>) -> Self {
        if let Some(api_base) = api_base {
            self.api_base = api_base;
        }
        if let Some(session_id) = session_id {
            self.session_id = session_id;
        }
        self
    }

    /// 必須項目をチェック
    pub fn validate(&self) -> Result<(), ImportError> {
        if self.api_base.trim().is_empty() {
            return Err(ImportError::Config("api_base is not set".to_string()));
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ImportError::Config(format!(
                "api_base must start with http:// or https://, got {:?}",
                self.api_base
            )));
        }
        if self.session_id.trim().is_empty() {
            return Err(ImportError::Config("session_id is not set".to_string()));
        }
        Ok(())
    }

    /// イベント作成エンドポイントのURL
    pub fn event_endpoint(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), EVENT_PATH)
    }

    pub fn entry_options(&self) -> EntryOptions {
        EntryOptions {
            starts_at_tz: self.starts_at_tz,
            priority: self.priority,
        }
    }
}
