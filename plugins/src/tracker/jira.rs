//! Jira REST v2 status lookups.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use jiratodo_core::api::{JiraConfig, Status, StatusTracker, TrackerError};
use serde::Deserialize;

const BODY_SNIPPET_CHARS: usize = 200;

pub struct JiraRestTracker {
    client: reqwest::Client,
    base_url: reqwest::Url,
    auth_header: String,
}

#[derive(Debug, Deserialize)]
struct IssueResponse {
    fields: IssueFields,
}

#[derive(Debug, Deserialize)]
struct IssueFields {
    status: StatusField,
}

#[derive(Debug, Deserialize)]
struct StatusField {
    id: String,
    name: String,
}

impl JiraRestTracker {
    pub fn new(cfg: &JiraConfig) -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| TrackerError::Client(e.to_string()))?;
        let base_url = reqwest::Url::parse(&cfg.url)
            .map_err(|e| TrackerError::Client(format!("invalid tracker url `{}`: {e}", cfg.url)))?;
        if base_url.cannot_be_a_base() {
            return Err(TrackerError::Client(format!("tracker url `{}` cannot hold a path", cfg.url)));
        }
        Ok(Self {
            client,
            base_url,
            auth_header: basic_auth_header(&cfg.username, &cfg.password),
        })
    }

    /// The key is appended as a single percent-encoded path segment.
    pub fn issue_url(&self, key: &str) -> Result<reqwest::Url, TrackerError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TrackerError::Client(format!("tracker url `{}` cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(["rest", "api", "2", "issue", key]);
        Ok(url)
    }
}

pub fn basic_auth_header(username: &str, password: &str) -> String {
    let token = base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {token}")
}

fn parse_issue_status(key: &str, body: &str) -> Result<Status, TrackerError> {
    let issue: IssueResponse = serde_json::from_str(body).map_err(|e| TrackerError::Decode {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    let StatusField { id, name } = issue.fields.status;
    let id = id
        .trim()
        .parse::<u32>()
        .map_err(|_| TrackerError::InvalidStatusId {
            key: key.to_string(),
            id: id.clone(),
        })?;
    Ok(Status::new(id, name))
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}

#[async_trait]
impl StatusTracker for JiraRestTracker {
    fn name(&self) -> &str {
        "jira"
    }

    async fn fetch_status(&self, key: &str) -> Result<Status, TrackerError> {
        let url = self.issue_url(key)?;
        tracing::debug!(target: "jiratodo.jira", %url, "GET issue");

        let resp = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TrackerError::Transport {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| TrackerError::Transport {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            tracing::debug!(target: "jiratodo.jira", key, status = status.as_u16(), "issue request rejected");
            return Err(TrackerError::HttpStatus {
                key: key.to_string(),
                status: status.as_u16(),
                body_snippet: snippet(&body),
            });
        }

        parse_issue_status(key, &body)
    }
}
