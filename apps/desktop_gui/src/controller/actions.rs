use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use chrono::{Local, NaiveDate};
use client_core::TextToolsApi;
use shared::{
    domain::{ModelKind, SummaryFormat, SummaryLength, SummarySource, AUTO_DETECT},
    protocol::{ApiOutcome, SummarizeRequest, TranslateRequest},
    text::{DEFAULT_MIN_LENGTH, MIN_SUMMARY_LENGTH},
};
use tracing::{info, warn};

use crate::{
    controller::SessionState,
    platform::Platform,
    ui::{
        dom::{ids, Document, DocumentHandle},
        presentation::{
            copy_to_clipboard, download_text, load_theme, populate_language_select,
            populate_model_select, radio_value, set_loading, show_status, swap_languages,
            toggle_theme, update_text_stats, validate_input, StatusKind,
            DEFAULT_STATUS_DURATION,
        },
    },
};

pub const DEFAULT_TARGET_LANGUAGE: &str = "hi";
pub const DEFAULT_TRANSLATION_MODEL: &str = "nllb";
pub const DEFAULT_SUMMARIZATION_MODEL: &str = "bart";

const LANGUAGES_FALLBACK: &str = "Failed to load languages";
const TRANSLATION_FALLBACK: &str = "Translation failed. Please try again.";
const SUMMARIZATION_FALLBACK: &str = "Summarization failed. Please try again.";
const NO_TRANSLATION_MESSAGE: &str = "Please translate text first or select \"Original Text\"";

#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub default_target_language: String,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            default_target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}

pub fn download_filename(date: NaiveDate) -> String {
    format!("arjun-ai-tools-{}.txt", date.format("%Y-%m-%d"))
}

/// Puts a button into its loading state and restores it when dropped, so every
/// exit from an action leaves the button usable again.
struct LoadingGuard<'a> {
    document: &'a DocumentHandle,
    button: &'static str,
    spinner: &'static str,
}

impl<'a> LoadingGuard<'a> {
    fn enter(document: &'a DocumentHandle, button: &'static str, spinner: &'static str) -> Self {
        document.update(|doc| set_loading(doc, button, spinner, true));
        Self {
            document,
            button,
            spinner,
        }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.document
            .update(|doc| set_loading(doc, self.button, self.spinner, false));
    }
}

#[derive(Clone)]
pub struct Controller {
    api: Arc<dyn TextToolsApi>,
    document: DocumentHandle,
    session: Arc<Mutex<SessionState>>,
    platform: Platform,
    options: ControllerOptions,
}

impl Controller {
    pub fn new(
        api: Arc<dyn TextToolsApi>,
        document: DocumentHandle,
        platform: Platform,
        options: ControllerOptions,
    ) -> Self {
        Self {
            api,
            document,
            session: Arc::new(Mutex::new(SessionState::default())),
            platform,
            options,
        }
    }

    pub fn document(&self) -> &DocumentHandle {
        &self.document
    }

    pub fn session(&self) -> SessionState {
        self.with_session(|session| session.clone())
    }

    fn with_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.session.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Theme, languages, models, then default selections.
    pub async fn initialize(&self) {
        self.document.update(|doc| {
            load_theme(doc, self.platform.preferences.as_ref());
            update_text_stats(doc, ids::INPUT_TEXT, ids::INPUT_STATS);
            update_text_stats(doc, ids::OUTPUT_TEXT, ids::OUTPUT_STATS);
        });

        match self.api.languages().await {
            ApiOutcome::Success(languages) => {
                info!(count = languages.len(), "loaded languages");
                self.document.update(|doc| {
                    populate_language_select(doc, ids::SOURCE_LANGUAGE, &languages, false);
                    populate_language_select(doc, ids::TARGET_LANGUAGE, &languages, true);
                    select_if_present(doc, ids::SOURCE_LANGUAGE, AUTO_DETECT);
                    select_if_present(
                        doc,
                        ids::TARGET_LANGUAGE,
                        &self.options.default_target_language,
                    );
                });
                self.with_session(|session| session.languages = languages);
            }
            ApiOutcome::Failure(err) => {
                warn!(error = %err, "failed to load languages");
                self.document.update(|doc| {
                    show_status(
                        doc,
                        err.message_or(LANGUAGES_FALLBACK),
                        StatusKind::Error,
                        Duration::ZERO,
                    )
                });
            }
        }

        for (kind, select_id) in [
            (ModelKind::Translation, ids::TRANSLATION_MODEL),
            (ModelKind::Summarization, ids::SUMMARIZATION_MODEL),
        ] {
            match self.api.models(kind).await {
                ApiOutcome::Success(models) if !models.is_empty() => {
                    self.document
                        .update(|doc| populate_model_select(doc, select_id, &models));
                }
                ApiOutcome::Success(_) => {}
                ApiOutcome::Failure(err) => {
                    warn!(kind = kind.as_str(), error = %err, "keeping built-in model list");
                }
            }
        }
    }

    /// The shell has already written `text` into the input element; this keeps
    /// the stats line and the session in step with it.
    pub fn input_changed(&self, text: String) {
        self.document
            .update(|doc| update_text_stats(doc, ids::INPUT_TEXT, ids::INPUT_STATS));
        self.with_session(|session| session.input_text = text);
    }

    pub fn clear_input(&self) {
        self.document.update(|doc| {
            doc.set_value(ids::INPUT_TEXT, "");
            update_text_stats(doc, ids::INPUT_TEXT, ids::INPUT_STATS);
        });
        self.with_session(|session| session.input_text.clear());
    }

    pub async fn translate(&self) {
        let default_target = self.options.default_target_language.as_str();
        let request = self.document.update(|doc| {
            let text = doc.value(ids::INPUT_TEXT).unwrap_or_default().to_string();
            if !validate_input(doc, &text, DEFAULT_MIN_LENGTH) {
                return None;
            }
            Some(TranslateRequest {
                text,
                source: selected_or(doc, ids::SOURCE_LANGUAGE, AUTO_DETECT),
                target: selected_or(doc, ids::TARGET_LANGUAGE, default_target),
                model: selected_or(doc, ids::TRANSLATION_MODEL, DEFAULT_TRANSLATION_MODEL),
            })
        });
        let Some(request) = request else {
            return;
        };

        info!(
            source = %request.source,
            target = %request.target,
            model = %request.model,
            chars = request.text.chars().count(),
            "translating"
        );
        let _loading =
            LoadingGuard::enter(&self.document, ids::TRANSLATE_BUTTON, ids::TRANSLATE_SPINNER);
        self.document
            .update(|doc| show_status(doc, "Translating...", StatusKind::Info, Duration::ZERO));

        match self.api.translate(&request).await {
            ApiOutcome::Success(response) => {
                self.publish_output(response.translated_text);
                self.document.update(|doc| {
                    show_status(
                        doc,
                        &format!("Translation completed in {}s", response.processing_time),
                        StatusKind::Success,
                        DEFAULT_STATUS_DURATION,
                    )
                });
            }
            ApiOutcome::Failure(err) => {
                self.clear_output();
                self.document.update(|doc| {
                    show_status(
                        doc,
                        err.message_or(TRANSLATION_FALLBACK),
                        StatusKind::Error,
                        DEFAULT_STATUS_DURATION,
                    )
                });
            }
        }
    }

    pub async fn summarize(&self) {
        let output_text = self.current_output();
        let request = self.document.update(|doc| {
            let source = radio_value(doc, ids::SUMMARY_SOURCE)
                .and_then(|value| value.parse::<SummarySource>().ok())
                .unwrap_or_default();
            let text = match source {
                SummarySource::Original => {
                    doc.value(ids::INPUT_TEXT).unwrap_or_default().to_string()
                }
                SummarySource::Translated => {
                    let Some(output_text) = output_text else {
                        show_status(
                            doc,
                            NO_TRANSLATION_MESSAGE,
                            StatusKind::Error,
                            DEFAULT_STATUS_DURATION,
                        );
                        return None;
                    };
                    output_text
                }
            };
            if !validate_input(doc, &text, MIN_SUMMARY_LENGTH) {
                return None;
            }

            Some(SummarizeRequest {
                text,
                model: selected_or(doc, ids::SUMMARIZATION_MODEL, DEFAULT_SUMMARIZATION_MODEL),
                length: radio_value(doc, ids::SUMMARY_LENGTH)
                    .and_then(|value| value.parse::<SummaryLength>().ok())
                    .unwrap_or_default(),
                format: radio_value(doc, ids::SUMMARY_FORMAT)
                    .and_then(|value| value.parse::<SummaryFormat>().ok())
                    .unwrap_or_default(),
            })
        });
        let Some(request) = request else {
            return;
        };

        info!(
            model = %request.model,
            length = %request.length,
            format = %request.format,
            chars = request.text.chars().count(),
            "summarizing"
        );
        let _loading =
            LoadingGuard::enter(&self.document, ids::SUMMARIZE_BUTTON, ids::SUMMARIZE_SPINNER);
        self.document.update(|doc| {
            show_status(doc, "Generating summary...", StatusKind::Info, Duration::ZERO)
        });

        match self.api.summarize(&request).await {
            ApiOutcome::Success(response) => {
                self.publish_output(response.summary);
                self.document.update(|doc| {
                    show_status(
                        doc,
                        &format!("Summary generated in {}s", response.processing_time),
                        StatusKind::Success,
                        DEFAULT_STATUS_DURATION,
                    )
                });
            }
            ApiOutcome::Failure(err) => {
                self.clear_output();
                self.document.update(|doc| {
                    show_status(
                        doc,
                        err.message_or(SUMMARIZATION_FALLBACK),
                        StatusKind::Error,
                        DEFAULT_STATUS_DURATION,
                    )
                });
            }
        }
    }

    pub async fn copy_output(&self) {
        let Some(text) = self.current_output() else {
            return;
        };
        copy_to_clipboard(&self.document, self.platform.clipboard.as_ref(), &text).await;
    }

    pub fn download_output(&self) {
        self.download_output_on(Local::now().date_naive());
    }

    fn download_output_on(&self, date: NaiveDate) {
        let Some(text) = self.current_output() else {
            return;
        };
        let filename = download_filename(date);
        self.document.update(|doc| {
            download_text(doc, self.platform.downloads.as_ref(), &filename, &text)
        });
    }

    pub fn toggle_theme(&self) {
        let theme = self
            .document
            .update(|doc| toggle_theme(doc, self.platform.preferences.as_ref()));
        info!(theme = theme.as_str(), "theme toggled");
    }

    pub fn swap_languages(&self) {
        if let Err(err) = self.document.update(swap_languages) {
            info!("swap refused: {err}");
        }
    }

    fn current_output(&self) -> Option<String> {
        self.with_session(|session| session.has_output().then(|| session.output_text.clone()))
    }

    fn publish_output(&self, text: String) {
        self.document.update(|doc| {
            doc.set_value(ids::OUTPUT_TEXT, text.as_str());
            update_text_stats(doc, ids::OUTPUT_TEXT, ids::OUTPUT_STATS);
            doc.set_disabled(ids::COPY_BUTTON, false);
            doc.set_disabled(ids::DOWNLOAD_BUTTON, false);
        });
        self.with_session(|session| session.output_text = text);
    }

    fn clear_output(&self) {
        self.document.update(|doc| {
            doc.set_value(ids::OUTPUT_TEXT, "");
            update_text_stats(doc, ids::OUTPUT_TEXT, ids::OUTPUT_STATS);
        });
        self.with_session(|session| session.output_text.clear());
    }
}

fn selected_or(doc: &Document, id: &str, fallback: &str) -> String {
    doc.value(id)
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn select_if_present(doc: &mut Document, id: &str, value: &str) {
    let present = doc
        .element(id)
        .is_some_and(|select| select.options.iter().any(|option| option.value == value));
    if present {
        doc.set_value(id, value);
    }
}

#[cfg(test)]
#[path = "tests/actions_tests.rs"]
mod tests;
