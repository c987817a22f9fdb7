//! Blocking call path

use tokio::runtime::Runtime;

use crate::core::client::TranslateClient;
use crate::core::config::ClientConfig;
use crate::core::errors::Result;
use crate::core::models::{DetectionsData, LanguagesData, ResponseEnvelope, TranslationsData};
use crate::core::request::{DetectRequest, LanguagesRequest, Request, TranslateRequest};

/// Occupies the calling thread for the whole exchange.
///
/// Owns a private current-thread runtime, so it must not be used from
/// inside an async context; use [`TranslateClient`] there.
#[derive(Debug)]
pub struct BlockingClient {
    inner: TranslateClient,
    runtime: Runtime,
}

impl BlockingClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let inner = TranslateClient::new(config)?;
        Ok(Self { inner, runtime })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Run one call to completion. Failures surface as a single error value.
    pub fn query<R: Request>(&self, request: &R) -> Result<ResponseEnvelope<R::Data>> {
        self.runtime.block_on(self.inner.query(request))
    }

    pub fn languages(&self, request: &LanguagesRequest) -> Result<ResponseEnvelope<LanguagesData>> {
        self.query(request)
    }

    pub fn translate(&self, request: &TranslateRequest) -> Result<ResponseEnvelope<TranslationsData>> {
        self.query(request)
    }

    pub fn detect(&self, request: &DetectRequest) -> Result<ResponseEnvelope<DetectionsData>> {
        self.query(request)
    }
}
