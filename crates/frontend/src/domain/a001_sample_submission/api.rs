use async_trait::async_trait;
use contracts::domain::a001_sample_submission::SubmissionBatch;
use gloo_net::http::Request;

use super::error::SubmitError;
use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;

/// Delivers a batch to the backend. The only operation that suspends.
#[async_trait(?Send)]
pub trait SubmissionTransport {
    async fn post_batch(&self, batch: &SubmissionBatch) -> Result<(), SubmitError>;
}

/// `POST /api/submissions` over fetch
#[derive(Debug, Clone)]
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(api_url(config, &config.submissions_path))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl SubmissionTransport for HttpTransport {
    /// Any 2xx is success; the response body is not read
    async fn post_batch(&self, batch: &SubmissionBatch) -> Result<(), SubmitError> {
        let response = Request::post(&self.url)
            .json(batch)
            .map_err(|e| SubmitError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(SubmitError::Rejected(response.status()));
        }

        Ok(())
    }
}
