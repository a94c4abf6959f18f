use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{load_settings, ApiClient, TextToolsApi};
use shared::{
    domain::{ModelKind, SummaryFormat, SummaryLength},
    protocol::{ApiOutcome, SummarizeRequest, TranslateRequest},
    text::{validate_text, TextStats, DEFAULT_MIN_LENGTH, MIN_SUMMARY_LENGTH},
};

#[derive(Parser, Debug)]
#[command(about = "Command-line client for the Arjun AI Text Tools backend")]
struct Args {
    /// Backend base URL; overrides text_tools.toml and the environment.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Backend status and version.
    Health,
    /// Languages the backend can translate between.
    Languages,
    /// Models available for a task.
    Models { kind: ModelKind },
    Translate {
        /// Text to translate; read from stdin when omitted.
        #[arg(long)]
        text: Option<String>,
        #[arg(long, default_value = "auto")]
        source: String,
        #[arg(long, default_value = "hi")]
        target: String,
        #[arg(long, default_value = "nllb")]
        model: String,
    },
    Summarize {
        /// Text to summarize; read from stdin when omitted.
        #[arg(long)]
        text: Option<String>,
        #[arg(long, default_value = "bart")]
        model: String,
        #[arg(long, default_value_t = SummaryLength::Short)]
        length: SummaryLength,
        #[arg(long, default_value_t = SummaryFormat::Paragraph)]
        format: SummaryFormat,
    },
}

fn read_text(text: Option<String>, stdin: &mut dyn Read) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            Ok(buf)
        }
    }
}

fn succeed<T>(outcome: ApiOutcome<T>) -> Result<T> {
    match outcome {
        ApiOutcome::Success(value) => Ok(value),
        ApiOutcome::Failure(err) => bail!("{}", err.message),
    }
}

/// Runs one subcommand and returns what should be printed.
async fn execute(command: Command, api: &dyn TextToolsApi, stdin: &mut dyn Read) -> Result<String> {
    match command {
        Command::Health => {
            let health = succeed(api.health().await)?;
            Ok(format!(
                "{} (version {}): {}",
                health.status, health.version, health.message
            ))
        }
        Command::Languages => {
            let languages = succeed(api.languages().await)?;
            Ok(languages
                .iter()
                .map(|language| format!("{:<6} {}", language.code, language.display_label()))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Models { kind } => {
            let models = succeed(api.models(kind).await)?;
            Ok(models
                .iter()
                .map(|model| {
                    let marker = if model.recommended { " *" } else { "" };
                    format!("{:<12} {}{marker}", model.id, model.name)
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Command::Translate {
            text,
            source,
            target,
            model,
        } => {
            let text = read_text(text, stdin)?;
            validate_text(&text, DEFAULT_MIN_LENGTH)?;
            tracing::info!(%source, %target, %model, "translating");
            let response = succeed(
                api.translate(&TranslateRequest {
                    text,
                    source,
                    target,
                    model,
                })
                .await,
            )?;
            tracing::info!(
                seconds = response.processing_time,
                stats = %TextStats::of(&response.translated_text).display(),
                "translation completed"
            );
            Ok(response.translated_text)
        }
        Command::Summarize {
            text,
            model,
            length,
            format,
        } => {
            let text = read_text(text, stdin)?;
            validate_text(&text, MIN_SUMMARY_LENGTH)?;
            tracing::info!(%model, %length, %format, "summarizing");
            let response = succeed(
                api.summarize(&SummarizeRequest {
                    text,
                    model,
                    length,
                    format,
                })
                .await,
            )?;
            tracing::info!(seconds = response.processing_time, "summary generated");
            Ok(response.summary)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.api_url {
        settings.api_base_url = url;
    }
    let client = ApiClient::from_settings(&settings)?;

    let output = execute(args.command, &client, &mut io::stdin()).await?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use shared::{
        domain::{Language, ModelInfo},
        protocol::{HealthResponse, SummarizeResponse, TranslateResponse},
    };

    use super::*;

    #[derive(Default)]
    struct ScriptedApi {
        translations: Mutex<Vec<TranslateRequest>>,
        summaries: Mutex<Vec<SummarizeRequest>>,
    }

    #[async_trait]
    impl TextToolsApi for ScriptedApi {
        async fn translate(&self, request: &TranslateRequest) -> ApiOutcome<TranslateResponse> {
            self.translations
                .lock()
                .expect("log")
                .push(request.clone());
            ApiOutcome::Success(TranslateResponse {
                translated_text: format!("[{}] {}", request.target, request.text.trim()),
                processing_time: 0.2,
                source_language: None,
                target_language: None,
                model_used: None,
            })
        }

        async fn summarize(&self, request: &SummarizeRequest) -> ApiOutcome<SummarizeResponse> {
            self.summaries.lock().expect("log").push(request.clone());
            ApiOutcome::failure("Summarization model not loaded")
        }

        async fn languages(&self) -> ApiOutcome<Vec<Language>> {
            ApiOutcome::Success(vec![Language {
                code: "hi".to_string(),
                name: "Hindi".to_string(),
                native: "हिन्दी".to_string(),
            }])
        }

        async fn models(&self, _: ModelKind) -> ApiOutcome<Vec<ModelInfo>> {
            ApiOutcome::Success(vec![ModelInfo {
                id: "nllb".to_string(),
                name: "NLLB-200".to_string(),
                recommended: true,
                model_path: None,
            }])
        }

        async fn health(&self) -> ApiOutcome<HealthResponse> {
            ApiOutcome::connection_failure()
        }
    }

    fn parse(argv: &[&str]) -> Command {
        let mut full = vec!["text_tools_cli"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).expect("args").command
    }

    #[tokio::test]
    async fn translate_reads_stdin_when_text_is_omitted() {
        let api = ScriptedApi::default();
        let mut stdin = "Good morning\n".as_bytes();

        let out = execute(parse(&["translate", "--target", "bn"]), &api, &mut stdin)
            .await
            .expect("translate");

        assert_eq!(out, "[bn] Good morning");
        let sent = api.translations.lock().expect("log").clone();
        assert_eq!(sent[0].source, "auto");
        assert_eq!(sent[0].model, "nllb");
    }

    #[tokio::test]
    async fn validation_runs_before_any_request() {
        let api = ScriptedApi::default();
        let mut stdin = io::empty();

        let err = execute(parse(&["translate", "--text", "   "]), &api, &mut stdin)
            .await
            .expect_err("empty text");
        assert_eq!(err.to_string(), "Please enter some text");

        let err = execute(parse(&["summarize", "--text", "short"]), &api, &mut stdin)
            .await
            .expect_err("short text");
        assert_eq!(err.to_string(), "Text must be at least 50 characters long");
        assert!(api.translations.lock().expect("log").is_empty());
        assert!(api.summaries.lock().expect("log").is_empty());
    }

    #[tokio::test]
    async fn failure_envelope_becomes_error() {
        let api = ScriptedApi::default();
        let text = "A sufficiently long passage of text that easily clears the minimum.";

        let err = execute(
            parse(&["summarize", "--text", text, "--length", "long", "--format", "bullets"]),
            &api,
            &mut io::empty(),
        )
        .await
        .expect_err("server failure");
        assert_eq!(err.to_string(), "Summarization model not loaded");

        let sent = api.summaries.lock().expect("log").clone();
        assert_eq!(sent[0].length, SummaryLength::Long);
        assert_eq!(sent[0].format, SummaryFormat::Bullets);

        let err = execute(parse(&["health"]), &api, &mut io::empty())
            .await
            .expect_err("offline");
        assert_eq!(
            err.to_string(),
            "Failed to connect to server. Please ensure the backend is running."
        );
    }

    #[tokio::test]
    async fn listings_are_one_entry_per_line() {
        let api = ScriptedApi::default();
        let languages = execute(parse(&["languages"]), &api, &mut io::empty())
            .await
            .expect("languages");
        assert_eq!(languages, "hi     Hindi (हिन्दी)");

        let models = execute(parse(&["models", "translation"]), &api, &mut io::empty())
            .await
            .expect("models");
        assert_eq!(models, "nllb         NLLB-200 *");
    }

    #[test]
    fn unknown_model_kind_is_rejected() {
        assert!(Args::try_parse_from(["text_tools_cli", "models", "vision"]).is_err());
    }
}
