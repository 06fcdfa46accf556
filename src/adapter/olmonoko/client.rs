//! olmonoko HTTP Client Abstractions
//!
//! HTTPクライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::Client;

#[cfg(test)]
use mockall::automock;

use super::form::EventForm;

/// Cookie header value for an olmonoko session
pub fn session_cookie(session_id: &str) -> String {
    format!("session_id={}", session_id)
}

/// Trait for posting event forms to olmonoko
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventPoster: Send + Sync {
    /// POST the form and return the HTTP status code
    async fn post_form(&self, url: &str, session_id: &str, form: &EventForm) -> Result<u16>;
}

/// reqwest-backed implementation of EventPoster
pub struct ReqwestEventPoster {
    client: Client,
}

impl ReqwestEventPoster {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl EventPoster for ReqwestEventPoster {
    async fn post_form(&self, url: &str, session_id: &str, form: &EventForm) -> Result<u16> {
        let response = self
            .client
            .post(url)
            .header(COOKIE, session_cookie(session_id))
            .form(form)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        Ok(response.status().as_u16())
    }
}
