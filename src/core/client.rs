//! Async request executor for the translation API

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{CancelCause, Result, TranslateError};
use crate::core::models::{
    DataBody, DetectionsData, ErrorBody, LanguagesData, ResponseEnvelope, TranslationsData,
};
use crate::core::pending::PendingResult;
use crate::core::request::{DetectRequest, LanguagesRequest, Request, TranslateRequest};

/// Async client issuing one HTTP exchange per call, no retries
#[derive(Debug, Clone)]
pub struct TranslateClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl TranslateClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .pool_idle_timeout(Some(Duration::from_secs(config.pool_idle_timeout_secs)))
            .pool_max_idle_per_host(config.pool_max_idle_per_host);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validate, dispatch and decode one request
    pub async fn query<R: Request>(&self, request: &R) -> Result<ResponseEnvelope<R::Data>> {
        let params = request.query_params()?;
        let url = self.config.endpoint(request.path());
        let method = request.method();

        debug!("{} {} ({} params)", method, url, params.len());

        let mut builder = self.client.request(method.clone(), &url).query(&params);
        if method == reqwest::Method::POST {
            // parameters travel in the query string; the service rejects POSTs without a length
            builder = builder.header(reqwest::header::CONTENT_LENGTH, "0");
        }
        let response = builder.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Failed to read error body from {}: {}", url, e);
                    String::new()
                }
            };
            let remote = serde_json::from_str::<ErrorBody>(&body).ok().map(|b| b.error);
            if let Some(remote) = &remote {
                warn!("{} failed: {} {}", url, remote.status, remote.message);
            }
            return Err(TranslateError::Service {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                remote,
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let decoded: DataBody<R::Data> =
            serde_json::from_slice(&body).map_err(|e| TranslateError::InvalidResponse {
                message: e.to_string(),
            })?;

        Ok(ResponseEnvelope::ok(decoded.data))
    }

    /// The configured transport timeout is a cancellation, not a network failure
    fn transport_error(&self, err: reqwest::Error) -> TranslateError {
        match self.config.timeout() {
            Some(limit) if err.is_timeout() => {
                info!("Request timed out after {:?}", limit);
                TranslateError::Cancelled(CancelCause::Timeout(limit))
            }
            _ => err.into(),
        }
    }

    /// Dispatch on a background task and return immediately.
    ///
    /// When `timeout` elapses first the in-flight request is dropped and the
    /// result is a cancellation error.
    pub fn query_async<R: Request>(
        &self,
        request: R,
        timeout: Option<Duration>,
    ) -> PendingResult<R::Data> {
        let this = self.clone();
        PendingResult::spawn(async move {
            match timeout {
                Some(limit) => match tokio::time::timeout(limit, this.query(&request)).await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        info!("Call to {} timed out after {:?}", request.path(), limit);
                        Err(TranslateError::Cancelled(CancelCause::Timeout(limit)))
                    }
                },
                None => this.query(&request).await,
            }
        })
    }

    /// Dispatch on a background task that stops waiting once `token` is cancelled
    pub fn query_with_cancellation<R: Request>(
        &self,
        request: R,
        token: CancellationToken,
    ) -> PendingResult<R::Data> {
        let this = self.clone();
        PendingResult::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    info!("Call to {} cancelled", request.path());
                    Err(TranslateError::Cancelled(CancelCause::Signal))
                }
                outcome = this.query(&request) => outcome,
            }
        })
    }

    /// Supported languages, names rendered in the request's target language
    pub async fn languages(&self, request: &LanguagesRequest) -> Result<ResponseEnvelope<LanguagesData>> {
        self.query(request).await
    }

    pub async fn translate(&self, request: &TranslateRequest) -> Result<ResponseEnvelope<TranslationsData>> {
        self.query(request).await
    }

    pub async fn detect(&self, request: &DetectRequest) -> Result<ResponseEnvelope<DetectionsData>> {
        self.query(request).await
    }
}
