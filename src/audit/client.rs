use crate::audit::models::{AuditRequest, AuditResult, Competitor};
use reqwest::{Client, Error as ReqwestError};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum AuditError {
    #[error(transparent)]
    Request(#[from] ReqwestError),
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("Unexpected response format from the server.")]
    UnexpectedFormat,
}

/// Raw audit response before validation
#[derive(Debug, Deserialize)]
struct AuditResponse {
    seo_score: Option<serde_json::Number>,
    meta_tags: Option<serde_json::Map<String, serde_json::Value>>,
    competitor_comparison: Option<Vec<Competitor>>,
}

impl AuditResponse {
    /// A required field that is missing or null makes the whole body
    /// malformed. A score of 0 is indistinguishable from a missing one
    /// here and is rejected the same way.
    fn into_result(self) -> Result<AuditResult, AuditError> {
        let seo_score = match self.seo_score {
            Some(score) if score.as_f64() != Some(0.0) => score,
            _ => return Err(AuditError::UnexpectedFormat),
        };

        let meta_tags = self.meta_tags.ok_or(AuditError::UnexpectedFormat)?;
        let competitor_comparison = self
            .competitor_comparison
            .ok_or(AuditError::UnexpectedFormat)?;

        Ok(AuditResult {
            seo_score,
            meta_tags,
            competitor_comparison,
        })
    }
}

#[derive(Clone)]
pub struct AuditClient {
    client: Client,
    base_url: String,
}

impl AuditClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Submit a URL and target keyword for auditing
    pub async fn run_audit(&self, request: &AuditRequest) -> Result<AuditResult, AuditError> {
        let url = format!("{}/audit", self.base_url);

        info!(
            "📡 Audit API: POST {} with url='{}', keyword='{}'",
            url, request.url, request.target_keyword
        );

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("✗ Audit API error: {}", status);
            return Err(AuditError::Status(status.as_u16()));
        }

        let body: AuditResponse = response.json().await?;
        let result = body.into_result()?;

        info!(
            "✓ Audit returned score {} with {} meta tag(s) and {} competitor(s)",
            result.seo_score,
            result.meta_tags.len(),
            result.competitor_comparison.len()
        );

        Ok(result)
    }
}
