//! Request descriptors for each endpoint

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, TranslateError};
use crate::core::language::Language;
use crate::core::models::{DetectionsData, Format, LanguagesData, Model, TranslationsData};

/// Query parameters rendered from a validated request
pub type QueryParams = Vec<(&'static str, String)>;

/// A caller-supplied parameter set for one API call
pub trait Request: Send + Sync + 'static {
    /// Decoded payload type of the endpoint
    type Data: DeserializeOwned + Default + Send + 'static;

    /// Path appended to the base URL
    fn path(&self) -> &'static str;

    fn method(&self) -> Method {
        Method::GET
    }

    /// Check required fields
    fn validate(&self) -> Result<()>;

    /// Render into query parameters. Validates first.
    fn query_params(&self) -> Result<QueryParams>;
}

fn require_key(key: &Option<String>) -> Result<&str> {
    match key.as_deref() {
        Some(k) if !k.is_empty() => Ok(k),
        _ => Err(TranslateError::required("Key")),
    }
}

fn require_texts(texts: &[String]) -> Result<()> {
    if texts.iter().all(|q| q.is_empty()) {
        return Err(TranslateError::required("Text"));
    }
    Ok(())
}

/// Lists the languages supported by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguagesRequest {
    pub key: Option<String>,
    /// Language the names are returned in
    pub target: Option<Language>,
    pub model: Option<Model>,
}

impl LanguagesRequest {
    pub fn new(key: impl Into<String>, target: Language) -> Self {
        Self {
            key: Some(key.into()),
            target: Some(target),
            model: None,
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }
}

impl Request for LanguagesRequest {
    type Data = LanguagesData;

    fn path(&self) -> &'static str {
        "/languages"
    }

    fn validate(&self) -> Result<()> {
        require_key(&self.key)?;
        if self.target.is_none() {
            return Err(TranslateError::required("Target"));
        }
        Ok(())
    }

    fn query_params(&self) -> Result<QueryParams> {
        self.validate()?;
        let key = require_key(&self.key)?;
        let mut params = vec![("key", key.to_string())];
        if let Some(target) = self.target {
            params.push(("target", target.code().to_string()));
        }
        if let Some(model) = self.model {
            params.push(("model", model.as_str().to_string()));
        }
        Ok(params)
    }
}

/// Translates one or more texts into a target language
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub key: Option<String>,
    /// Detected by the service when absent
    pub source: Option<Language>,
    pub target: Option<Language>,
    pub texts: Vec<String>,
    pub format: Option<Format>,
    pub model: Option<Model>,
}

impl TranslateRequest {
    pub fn new(key: impl Into<String>, target: Language, text: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            target: Some(target),
            texts: vec![text.into()],
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: Language) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.texts.push(text.into());
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }
}

impl Request for TranslateRequest {
    type Data = TranslationsData;

    fn path(&self) -> &'static str {
        ""
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn validate(&self) -> Result<()> {
        require_key(&self.key)?;
        if self.target.is_none() {
            return Err(TranslateError::required("Target"));
        }
        require_texts(&self.texts)
    }

    fn query_params(&self) -> Result<QueryParams> {
        self.validate()?;
        let mut params = vec![("key", require_key(&self.key)?.to_string())];
        params.extend(self.texts.iter().map(|q| ("q", q.clone())));
        if let Some(target) = self.target {
            params.push(("target", target.code().to_string()));
        }
        if let Some(source) = self.source {
            params.push(("source", source.code().to_string()));
        }
        if let Some(format) = self.format {
            params.push(("format", format.as_str().to_string()));
        }
        if let Some(model) = self.model {
            params.push(("model", model.as_str().to_string()));
        }
        Ok(params)
    }
}

/// Detects the language of one or more texts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectRequest {
    pub key: Option<String>,
    pub texts: Vec<String>,
}

impl DetectRequest {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            texts: vec![text.into()],
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.texts.push(text.into());
        self
    }
}

impl Request for DetectRequest {
    type Data = DetectionsData;

    fn path(&self) -> &'static str {
        "/detect"
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn validate(&self) -> Result<()> {
        require_key(&self.key)?;
        require_texts(&self.texts)
    }

    fn query_params(&self) -> Result<QueryParams> {
        self.validate()?;
        let mut params = vec![("key", require_key(&self.key)?.to_string())];
        params.extend(self.texts.iter().map(|q| ("q", q.clone())));
        Ok(params)
    }
}
