//! Stateless helpers over the document. Each looks its elements up by id and
//! quietly does nothing when one is missing.

use std::time::{Duration, Instant};

use shared::{
    domain::{Language, ModelInfo, Theme},
    error::SwapError,
    text::{validate_text, TextStats},
};
use tracing::{debug, warn};

use crate::{
    platform::{ClipboardWriter, DownloadTarget, PreferenceStore},
    ui::dom::{ids, Document, DocumentHandle, Element, SelectOption},
};

pub const DEFAULT_STATUS_DURATION: Duration = Duration::from_millis(3000);
pub const THEME_PREFERENCE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub const ALL: [StatusKind; 3] = [StatusKind::Info, StatusKind::Success, StatusKind::Error];

    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Info => "status-info",
            StatusKind::Success => "status-success",
            StatusKind::Error => "status-error",
        }
    }

    pub fn from_classes(element: &Element) -> StatusKind {
        Self::ALL
            .into_iter()
            .find(|kind| element.has_class(kind.class()))
            .unwrap_or(StatusKind::Info)
    }
}

pub fn update_text_stats(doc: &mut Document, textarea_id: &str, stats_id: &str) {
    let Some(text) = doc.value(textarea_id) else {
        return;
    };
    let display = TextStats::of(text).display();
    doc.set_text(stats_id, display);
}

pub fn set_loading(doc: &mut Document, button_id: &str, spinner_id: &str, loading: bool) {
    if let Some(button) = doc.element_mut(button_id) {
        button.disabled = loading;
        button.opacity = if loading { 0.5 } else { 1.0 };
    }
    if let Some(spinner) = doc.element_mut(spinner_id) {
        spinner.hidden = !loading;
    }
}

/// Shows the status banner. A zero `duration` keeps it up until it is hidden
/// or replaced; any call replaces the deadline of the previous message.
pub fn show_status(doc: &mut Document, message: &str, kind: StatusKind, duration: Duration) {
    let Some(bar) = doc.element_mut(ids::STATUS_BAR) else {
        return;
    };
    bar.text = message.to_string();
    for other in StatusKind::ALL {
        bar.classes.remove(other.class());
    }
    bar.classes.insert(kind.class().to_string());
    bar.hidden = false;

    let deadline = (!duration.is_zero()).then(|| Instant::now() + duration);
    doc.set_status_hide_at(deadline);
    debug!(?kind, message, "status shown");
}

pub fn hide_status(doc: &mut Document) {
    if let Some(bar) = doc.element_mut(ids::STATUS_BAR) {
        bar.hidden = true;
    }
    doc.set_status_hide_at(None);
}

/// Hides the banner once its deadline has passed. Returns true if it hid it.
pub fn expire_status(doc: &mut Document, now: Instant) -> bool {
    match doc.status_hide_at() {
        Some(deadline) if now >= deadline => {
            hide_status(doc);
            true
        }
        _ => false,
    }
}

pub async fn copy_to_clipboard(doc: &DocumentHandle, clipboard: &dyn ClipboardWriter, text: &str) {
    match clipboard.write_text(text).await {
        Ok(()) => doc.update(|doc| {
            show_status(
                doc,
                "Copied to clipboard!",
                StatusKind::Success,
                DEFAULT_STATUS_DURATION,
            )
        }),
        Err(err) => {
            warn!("clipboard write failed: {err:#}");
            doc.update(|doc| {
                show_status(
                    doc,
                    "Failed to copy to clipboard",
                    StatusKind::Error,
                    DEFAULT_STATUS_DURATION,
                )
            });
        }
    }
}

pub fn download_text(
    doc: &mut Document,
    target: &dyn DownloadTarget,
    filename: &str,
    content: &str,
) {
    match target.save_text(filename, content) {
        Ok(path) => show_status(
            doc,
            &format!("Downloaded to {}", path.display()),
            StatusKind::Success,
            DEFAULT_STATUS_DURATION,
        ),
        Err(err) => {
            warn!(filename, "download failed: {err:#}");
            show_status(
                doc,
                "Failed to download file",
                StatusKind::Error,
                DEFAULT_STATUS_DURATION,
            );
        }
    }
}

/// Replaces the options of a language selector. Target selectors pass
/// `exclude_auto` so the auto-detect sentinel never appears there.
pub fn populate_language_select(
    doc: &mut Document,
    select_id: &str,
    languages: &[Language],
    exclude_auto: bool,
) {
    let Some(select) = doc.element_mut(select_id) else {
        return;
    };
    select.options = languages
        .iter()
        .filter(|language| !(exclude_auto && language.is_auto_detect()))
        .map(|language| SelectOption::new(&language.code, language.display_label()))
        .collect();
    select.value = select
        .options
        .first()
        .map(|option| option.value.clone())
        .unwrap_or_default();
}

pub fn populate_model_select(doc: &mut Document, select_id: &str, models: &[ModelInfo]) {
    let Some(select) = doc.element_mut(select_id) else {
        return;
    };
    select.options = models
        .iter()
        .map(|model| SelectOption::new(&model.id, &model.name))
        .collect();
    select.value = models
        .iter()
        .find(|model| model.recommended)
        .or_else(|| models.first())
        .map(|model| model.id.clone())
        .unwrap_or_default();
}

pub fn current_theme(doc: &Document) -> Theme {
    doc.root_attribute(ids::THEME_ATTRIBUTE)
        .and_then(|value| value.parse::<Theme>().ok())
        .unwrap_or_default()
}

pub fn apply_theme(doc: &mut Document, theme: Theme) {
    doc.set_root_attribute(ids::THEME_ATTRIBUTE, theme.as_str());
    doc.set_text(ids::THEME_TOGGLE, theme.icon());
}

pub fn load_theme(doc: &mut Document, store: &dyn PreferenceStore) -> Theme {
    let theme = store
        .get(THEME_PREFERENCE_KEY)
        .and_then(|value| value.parse::<Theme>().ok())
        .unwrap_or_default();
    apply_theme(doc, theme);
    theme
}

pub fn toggle_theme(doc: &mut Document, store: &dyn PreferenceStore) -> Theme {
    let theme = current_theme(doc).toggled();
    apply_theme(doc, theme);
    if let Err(err) = store.set(THEME_PREFERENCE_KEY, theme.as_str()) {
        warn!(theme = theme.as_str(), "failed to persist theme: {err:#}");
    }
    theme
}

/// Swaps source and target selections. Refused while the source is auto-detect.
pub fn swap_languages(doc: &mut Document) -> Result<(), SwapError> {
    let (Some(source), Some(target)) = (
        doc.value(ids::SOURCE_LANGUAGE).map(str::to_string),
        doc.value(ids::TARGET_LANGUAGE).map(str::to_string),
    ) else {
        return Ok(());
    };

    if source == shared::domain::AUTO_DETECT {
        let err = SwapError::AutoDetectSource;
        show_status(doc, &err.to_string(), StatusKind::Error, DEFAULT_STATUS_DURATION);
        return Err(err);
    }

    doc.set_value(ids::SOURCE_LANGUAGE, target);
    doc.set_value(ids::TARGET_LANGUAGE, source);
    Ok(())
}

pub fn radio_value(doc: &Document, group: &str) -> Option<String> {
    doc.radio_group(group)
        .and_then(|group| group.checked.clone())
}

/// Shows the matching error and returns false when `text` is blank or shorter
/// than `min_length` once trimmed.
pub fn validate_input(doc: &mut Document, text: &str, min_length: usize) -> bool {
    match validate_text(text, min_length) {
        Ok(()) => true,
        Err(err) => {
            show_status(doc, &err.to_string(), StatusKind::Error, DEFAULT_STATUS_DURATION);
            false
        }
    }
}
