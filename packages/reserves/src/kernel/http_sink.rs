//! REST reorder sink.
//!
//! Sends the reorder payload as JSON with `PUT {api_url}/courses/{course_id}/reorder`.

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::BaseReorderSink;
use crate::config::Config;
use crate::domains::reserves::data::ReorderPayload;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("reorder endpoint returned {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone)]
pub struct HttpReorderSink {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl HttpReorderSink {
    pub fn new(config: &Config) -> std::result::Result<Self, SinkError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: config.api_token.clone(),
        })
    }

    pub fn reorder_url(&self, course_id: &str) -> String {
        format!("{}/courses/{}/reorder", self.api_url, course_id)
    }
}

#[async_trait]
impl BaseReorderSink for HttpReorderSink {
    async fn reorder(&self, course_id: &str, payload: &ReorderPayload) -> Result<()> {
        let url = self.reorder_url(course_id);
        debug!(
            course_id,
            electronic = payload.electronic.len(),
            print = payload.print.len(),
            "Sending reorder request"
        );

        let mut request = self.client.put(&url).json(payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(SinkError::from)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SinkError::Api {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        Ok(())
    }
}
