//! Core data models for requests and responses

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::language::Language;

/// Status vocabulary of the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    Cancelled,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    Unauthenticated,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Wire spelling used by the service
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Cancelled => "CANCELLED",
            Status::InvalidArgument => "INVALID_ARGUMENT",
            Status::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Status::NotFound => "NOT_FOUND",
            Status::AlreadyExists => "ALREADY_EXISTS",
            Status::PermissionDenied => "PERMISSION_DENIED",
            Status::Unauthenticated => "UNAUTHENTICATED",
            Status::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Status::FailedPrecondition => "FAILED_PRECONDITION",
            Status::Aborted => "ABORTED",
            Status::OutOfRange => "OUT_OF_RANGE",
            Status::Unimplemented => "UNIMPLEMENTED",
            Status::Internal => "INTERNAL",
            Status::Unavailable => "UNAVAILABLE",
            Status::DataLoss => "DATA_LOSS",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translation model selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Phrase-based model
    Base,
    /// Neural machine translation
    Nmt,
}

impl Model {
    pub fn as_str(self) -> &'static str {
        match self {
            Model::Base => "base",
            Model::Nmt => "nmt",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Html,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Html => "html",
        }
    }
}

/// Typed response: status plus decoded payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub status: Status,
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: Status::Ok,
            data,
        }
    }
}

/// Raw `{"data": ...}` wrapper used by every endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct DataBody<T> {
    #[serde(default)]
    pub data: T,
}

/// Payload of the languages endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguagesData {
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

/// One supported language as reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Raw language code, kept verbatim so new codes don't break decoding
    pub language: String,
    /// Display name in the requested target language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LanguageEntry {
    pub fn language_code(&self) -> Option<Language> {
        Language::from_code(&self.language)
    }
}

/// Payload of the translate endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationsData {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_source_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Payload of the detect endpoint, one list of candidates per input text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionsData {
    #[serde(default)]
    pub detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub language: String,
    #[serde(default)]
    pub is_reliable: bool,
    #[serde(default)]
    pub confidence: f64,
}

/// Error body returned alongside non-success statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default = "unknown_status")]
    pub status: Status,
    #[serde(default)]
    pub errors: Vec<RemoteErrorItem>,
}

fn unknown_status() -> Status {
    Status::Unknown
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteErrorItem {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: RemoteError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collections_decode_empty() {
        let body: DataBody<LanguagesData> = serde_json::from_str("{}").unwrap();
        assert!(body.data.languages.is_empty());

        let body: DataBody<TranslationsData> = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(body.data.translations.is_empty());

        let body: DataBody<DetectionsData> = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(body.data.detections.is_empty());
    }

    #[test]
    fn test_unknown_language_code_still_decodes() {
        let body: DataBody<LanguagesData> = serde_json::from_str(
            r#"{"data":{"languages":[{"language":"af","name":"Afrikaans"},{"language":"xx-new"}]}}"#,
        )
        .unwrap();
        let entries = body.data.languages;
        assert_eq!(entries[0].language_code(), Some(Language::Afrikaans));
        assert_eq!(entries[1].language_code(), None);
        assert_eq!(entries[1].name, None);
    }

    #[test]
    fn test_status_vocabulary() {
        let status: Status = serde_json::from_str("\"INVALID_ARGUMENT\"").unwrap();
        assert_eq!(status, Status::InvalidArgument);
        let status: Status = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(status, Status::Unknown);
        assert_eq!(Status::PermissionDenied.to_string(), "PERMISSION_DENIED");
        assert_eq!(Status::Ok.to_string(), "OK");
        assert_eq!(Status::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_status_display_matches_wire_spelling() {
        for status in [
            Status::Ok,
            Status::InvalidArgument,
            Status::DeadlineExceeded,
            Status::ResourceExhausted,
            Status::DataLoss,
        ] {
            let wire = serde_json::to_value(status).unwrap();
            assert_eq!(wire.as_str(), Some(status.as_str()));
        }
    }

    #[test]
    fn test_remote_error_body() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.",
                "errors":[{"message":"API key not valid. Please pass a valid API key.",
                "domain":"global","reason":"badRequest"}],"status":"INVALID_ARGUMENT"}}"#,
        )
        .unwrap();
        assert_eq!(body.error.code, 400);
        assert_eq!(body.error.status, Status::InvalidArgument);
        assert_eq!(body.error.errors[0].reason, "badRequest");
    }

    #[test]
    fn test_translation_fields() {
        let body: DataBody<TranslationsData> = serde_json::from_str(
            r#"{"data":{"translations":[{"translatedText":"Hallo","detectedSourceLanguage":"en"}]}}"#,
        )
        .unwrap();
        let t = &body.data.translations[0];
        assert_eq!(t.translated_text, "Hallo");
        assert_eq!(t.detected_source_language.as_deref(), Some("en"));
        assert_eq!(t.model, None);
    }
}
