// src/client/http.rs
//! reqwest-backed implementation of the client sources against the portal REST API

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, error};

use super::controller::DEFAULT_REQUEST_TIMEOUT;
use super::errors::SyncError;
use super::sources::{ApplicationSource, JobSource, SaveStateSource};
use crate::common::helpers::safe_token_log;
use crate::jobs::models::{Job, JobSearchParams};

#[derive(Debug, Deserialize)]
struct Ack {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JobsEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    jobs: Vec<Job>,
}

trait Enveloped {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

impl Enveloped for Ack {
    fn success(&self) -> bool {
        self.success
    }
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Enveloped for JobsEnvelope {
    fn success(&self) -> bool {
        self.success
    }
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct PortalClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl PortalClient {
    /// Client whose requests give up after [`DEFAULT_REQUEST_TIMEOUT`]
    pub fn new(base_url: impl Into<String>) -> Result<Self, SyncError> {
        let http = Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SyncError::Network(e.to_string()))?;

        Ok(Self::with_client(http, base_url))
    }

    /// Use a preconfigured `reqwest::Client`, e.g. one with proxies disabled
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach the bearer token used for the saved-job and application endpoints
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        debug!(token = %safe_token_log(&token), "Portal client authenticated");
        self.token = Some(token);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, SyncError> {
        match &self.token {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(SyncError::Auth("No session token".to_string())),
        }
    }

    async fn send<T>(&self, request: RequestBuilder) -> Result<T, SyncError>
    where
        T: DeserializeOwned + Enveloped,
    {
        let response = request.send().await?;
        parse_envelope(response).await
    }
}

/// Map an HTTP response to its payload, folding error statuses and
/// `success: false` bodies into [`SyncError`]
async fn parse_envelope<T>(response: Response) -> Result<T, SyncError>
where
    T: DeserializeOwned + Enveloped,
{
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<Ack>(&body)
            .ok()
            .and_then(|ack| ack.message);
        error!(status = %status, message = ?message, "Portal API request failed");
        return Err(SyncError::from_status(status, message));
    }

    let envelope: T = serde_json::from_str(&body).map_err(|e| SyncError::Server {
        status: status.as_u16(),
        message: format!("Malformed response: {}", e),
    })?;

    if !envelope.success() {
        return Err(SyncError::Validation(
            envelope.message().unwrap_or_default().to_string(),
        ));
    }
    Ok(envelope)
}

#[async_trait]
impl JobSource for PortalClient {
    async fn fetch_jobs(&self, params: &JobSearchParams) -> Result<Vec<Job>, SyncError> {
        debug!(params = ?params, "Fetching jobs");
        let request = self.http.get(self.url("/api/v1/job/get")).query(params);
        let envelope: JobsEnvelope = self.send(request).await?;
        Ok(envelope.jobs)
    }
}

#[async_trait]
impl SaveStateSource for PortalClient {
    async fn saved_job_ids(&self) -> Result<HashSet<String>, SyncError> {
        let request = self.authorized(self.http.get(self.url("/api/v1/user/savedJobs")))?;
        let envelope: JobsEnvelope = self.send(request).await?;
        Ok(envelope.jobs.into_iter().map(|job| job.id).collect())
    }

    async fn save(&self, job_id: &str) -> Result<(), SyncError> {
        let path = format!("/api/v1/user/saveJob/{}", urlencoding::encode(job_id));
        let request = self.authorized(self.http.post(self.url(&path)))?;
        let _: Ack = self.send(request).await?;
        Ok(())
    }

    async fn unsave(&self, job_id: &str) -> Result<(), SyncError> {
        let path = format!("/api/v1/user/unsaveJob/{}", urlencoding::encode(job_id));
        let request = self.authorized(self.http.delete(self.url(&path)))?;
        let _: Ack = self.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl ApplicationSource for PortalClient {
    async fn applied_job_ids(&self) -> Result<HashSet<String>, SyncError> {
        let request = self.authorized(self.http.get(self.url("/api/v1/application/get")))?;
        let envelope: JobsEnvelope = self.send(request).await?;
        Ok(envelope.jobs.into_iter().map(|job| job.id).collect())
    }

    async fn apply(&self, job_id: &str) -> Result<(), SyncError> {
        let path = format!("/api/v1/application/apply/{}", urlencoding::encode(job_id));
        let request = self.authorized(self.http.get(self.url(&path)))?;
        let _: Ack = self.send(request).await?;
        Ok(())
    }
}
