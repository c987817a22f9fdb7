//! Translate Client - typed bindings for the Cloud Translation v2 REST API
//!
//! Requests are validated locally, dispatched as a single HTTP exchange and
//! decoded into typed envelopes. Calls can block, run in the background with
//! an optional timeout, or run in the background under a cancellation token.

#![forbid(unsafe_code)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    blocking::BlockingClient,
    client::TranslateClient,
    config::ClientConfig,
    errors::{CancelCause, Result, TranslateError},
    language::Language,
    models::{
        Detection, DetectionsData, Format, LanguageEntry, LanguagesData, Model, RemoteError,
        ResponseEnvelope, Status, Translation, TranslationsData,
    },
    pending::PendingResult,
    request::{DetectRequest, LanguagesRequest, Request, TranslateRequest},
};

pub use tokio_util::sync::CancellationToken;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
