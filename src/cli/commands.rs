//! CLI command definitions and handlers

use clap::Subcommand;
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::core::client::TranslateClient;
use crate::core::config::ClientConfig;
use crate::core::language::Language;
use crate::core::models::{DetectionsData, LanguagesData, Model, ResponseEnvelope, TranslationsData};
use crate::core::request::{DetectRequest, LanguagesRequest, Request, TranslateRequest};

/// Commands for the translate client
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported languages
    Languages {
        /// Language the names are listed in (default: en)
        #[arg(short, long, default_value = "en")]
        target: Language,

        /// Restrict to languages supported by a model
        #[arg(long, value_enum)]
        model: Option<Model>,
    },

    /// Translate text
    Translate {
        /// Target language code
        #[arg(short, long)]
        target: Language,

        /// Source language code (auto-detect if not specified)
        #[arg(short, long)]
        source: Option<Language>,

        /// Text to translate, one result per argument
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Detect the language of text
    Detect {
        /// Text to inspect, one result per argument
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
    pub json: bool,
}

impl GlobalOptions {
    fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Execute a command and print its output
pub async fn execute(command: Commands, options: GlobalOptions) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = options.base_url.clone() {
        config.base_url = base_url;
    }
    let key = options.api_key.clone().or_else(|| config.api_key.clone());
    let client = TranslateClient::new(config)?;

    let output = match command {
        Commands::Languages { target, model } => {
            let request = LanguagesRequest {
                key,
                target: Some(target),
                model,
            };
            let envelope = run(&client, request, options.timeout()).await?;
            render(&envelope, options.json, render_languages)?
        }
        Commands::Translate { target, source, text } => {
            let request = TranslateRequest {
                key,
                source,
                target: Some(target),
                texts: text,
                ..Default::default()
            };
            let envelope = run(&client, request, options.timeout()).await?;
            render(&envelope, options.json, render_translations)?
        }
        Commands::Detect { text } => {
            let request = DetectRequest { key, texts: text };
            let envelope = run(&client, request, options.timeout()).await?;
            render(&envelope, options.json, render_detections)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Run one call in the background; Ctrl-C cancels it
async fn run<R: Request>(
    client: &TranslateClient,
    request: R,
    timeout: Option<Duration>,
) -> anyhow::Result<ResponseEnvelope<R::Data>> {
    let token = CancellationToken::new();
    let watcher = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, cancelling request");
            watcher.cancel();
        }
    });

    let pending = match timeout {
        Some(limit) => client.query_async(request, Some(limit)),
        None => client.query_with_cancellation(request, token.clone()),
    };
    debug!("Request dispatched");

    Ok(pending.wait_with(&token).await?)
}

fn render<T: Serialize>(
    envelope: &ResponseEnvelope<T>,
    json: bool,
    text: fn(&T) -> String,
) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(envelope)?)
    } else {
        Ok(text(&envelope.data))
    }
}

/// One `code<TAB>name` line per language
pub fn render_languages(data: &LanguagesData) -> String {
    data.languages
        .iter()
        .map(|entry| format!("{}\t{}", entry.language, entry.name.as_deref().unwrap_or("")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_translations(data: &TranslationsData) -> String {
    data.translations
        .iter()
        .map(|t| match &t.detected_source_language {
            Some(source) => format!("[{}] {}", source, t.translated_text),
            None => t.translated_text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_detections(data: &DetectionsData) -> String {
    data.detections
        .iter()
        .map(|candidates| match candidates.first() {
            Some(best) => format!("{}\t{:.2}", best.language, best.confidence),
            None => "-".to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{CancelCause, TranslateError};
    use crate::core::models::{Detection, LanguageEntry, Status, Translation};
    use assert_json_diff::assert_json_eq;
    use clap::Parser;
    use serde_json::json;
    use wiremock::matchers::path;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LANGUAGES_FIXTURE: &str = include_str!("../../tests/fixtures/languages_en.json");

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    async fn delayed_server(delay: Duration) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(path("/languages"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(LANGUAGES_FIXTURE, "application/json")
                    .set_delay(delay),
            )
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_model_flag() {
        let cli = Cli::try_parse_from(["translate-client", "languages", "--model", "nmt"]).unwrap();
        match cli.command {
            Commands::Languages { target, model } => {
                assert_eq!(target, Language::English);
                assert_eq!(model, Some(Model::Nmt));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let err = Cli::try_parse_from(["translate-client", "languages", "--model", "gpt"]).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("base"));
        assert!(rendered.contains("nmt"));
    }

    #[tokio::test]
    async fn test_run_without_timeout_waits_for_response() {
        let server = delayed_server(Duration::from_millis(50)).await;
        let client = TranslateClient::new(ClientConfig::with_base_url(server.uri())).unwrap();

        let envelope = run(&client, LanguagesRequest::new("good-key", Language::English), None)
            .await
            .unwrap();
        assert_eq!(envelope.status, Status::Ok);
        assert_eq!(envelope.data.languages.len(), 104);
    }

    #[tokio::test]
    async fn test_run_with_timeout_is_cancelled() {
        let server = delayed_server(Duration::from_millis(500)).await;
        let client = TranslateClient::new(ClientConfig::with_base_url(server.uri())).unwrap();

        let err = run(
            &client,
            LanguagesRequest::new("good-key", Language::English),
            Some(Duration::from_millis(1)),
        )
        .await
        .unwrap_err();

        let err = err.downcast_ref::<TranslateError>().unwrap();
        assert!(matches!(err, TranslateError::Cancelled(CancelCause::Timeout(_))));
    }

    #[tokio::test]
    async fn test_run_surfaces_validation_error() {
        let server = delayed_server(Duration::from_millis(0)).await;
        let client = TranslateClient::new(ClientConfig::with_base_url(server.uri())).unwrap();

        let err = run(&client, LanguagesRequest::default(), None).await.unwrap_err();
        assert_eq!(err.to_string(), "Key is required");
    }

    #[test]
    fn test_render_languages() {
        let data = LanguagesData {
            languages: vec![
                LanguageEntry {
                    language: "af".to_string(),
                    name: Some("Afrikaans".to_string()),
                },
                LanguageEntry {
                    language: "sq".to_string(),
                    name: None,
                },
            ],
        };
        assert_eq!(render_languages(&data), "af\tAfrikaans\nsq\t");
    }

    #[test]
    fn test_render_translations_and_detections() {
        let translations = TranslationsData {
            translations: vec![Translation {
                translated_text: "hej".to_string(),
                detected_source_language: Some("en".to_string()),
                model: None,
            }],
        };
        assert_eq!(render_translations(&translations), "[en] hej");

        let detections = DetectionsData {
            detections: vec![
                vec![Detection {
                    language: "fr".to_string(),
                    is_reliable: false,
                    confidence: 0.981,
                }],
                vec![],
            ],
        };
        assert_eq!(render_detections(&detections), "fr\t0.98\n-");
    }

    #[test]
    fn test_render_json() {
        let envelope = ResponseEnvelope::ok(LanguagesData {
            languages: vec![LanguageEntry {
                language: "af".to_string(),
                name: Some("Afrikaans".to_string()),
            }],
        });
        let output = render(&envelope, true, render_languages).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_json_eq!(
            value,
            json!({
                "status": "OK",
                "data": {"languages": [{"language": "af", "name": "Afrikaans"}]}
            })
        );
    }
}
