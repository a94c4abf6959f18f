use std::{path::PathBuf, time::Instant};

use crossbeam_channel::Sender;
use eframe::egui;
use shared::domain::Theme;

use crate::{
    controller::{actions::DEFAULT_TARGET_LANGUAGE, orchestration::dispatch_user_event, UserEvent},
    ui::{
        dom::{ids, Document, DocumentHandle},
        presentation::{current_theme, expire_status, hide_status, StatusKind},
        theme::{status_colors, visuals_for_theme},
    },
};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Overrides the configured backend URL when set.
    pub api_base_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub default_target_language: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            data_dir: None,
            default_target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub data_root: PathBuf,
    pub preferences_path: PathBuf,
}

impl AppPaths {
    pub fn from_startup(startup: &StartupConfig) -> anyhow::Result<Self> {
        let root = match &startup.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()
                .ok_or_else(|| anyhow::anyhow!("unable to resolve user config dir"))?
                .join("arjun_text_tools"),
        };

        Ok(Self {
            preferences_path: root.join("preferences.json"),
            data_root: root,
        })
    }
}

pub struct TextToolsApp {
    document: DocumentHandle,
    events: Sender<UserEvent>,
    applied_theme: Option<Theme>,
}

impl TextToolsApp {
    pub fn new(document: DocumentHandle, events: Sender<UserEvent>) -> Self {
        Self {
            document,
            events,
            applied_theme: None,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context, theme: Theme) {
        if self.applied_theme == Some(theme) {
            return;
        }
        ctx.set_visuals(visuals_for_theme(theme));
        self.applied_theme = Some(theme);
    }
}

impl eframe::App for TextToolsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending = Vec::new();
        {
            let document = self.document.clone();
            let mut doc = document.lock();
            expire_status(&mut doc, Instant::now());
            self.apply_theme_if_needed(ctx, current_theme(&doc));

            egui::TopBottomPanel::top("header").show(ctx, |ui| {
                show_header(ui, &doc, &mut pending);
            });
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                show_status_bar(ui, &mut doc);
            });
            egui::CentralPanel::default().show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    show_translator(ui, &mut doc, &mut pending);
                    ui.add_space(16.0);
                    ui.separator();
                    show_summarizer(ui, &mut doc, &mut pending);
                });
            });
        }

        // Dispatch outside the lock; a full queue writes to the status bar.
        for event in pending {
            dispatch_user_event(&self.events, event, &self.document);
        }
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn show_header(ui: &mut egui::Ui, doc: &Document, pending: &mut Vec<UserEvent>) {
    ui.horizontal(|ui| {
        ui.heading("Arjun AI Text Tools");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let icon = doc.text(ids::THEME_TOGGLE).unwrap_or_default();
            if ui
                .button(egui::RichText::new(icon).size(18.0))
                .on_hover_text("Toggle theme")
                .clicked()
            {
                pending.push(UserEvent::ToggleTheme);
            }
        });
    });
}

fn show_translator(ui: &mut egui::Ui, doc: &mut Document, pending: &mut Vec<UserEvent>) {
    ui.label(egui::RichText::new("Translate").strong().size(16.0));
    ui.horizontal_wrapped(|ui| {
        ui.label("From");
        select_combo(ui, doc, ids::SOURCE_LANGUAGE, 180.0);
        if action_button(ui, doc, ids::SWAP_LANGUAGES) {
            pending.push(UserEvent::SwapLanguages);
        }
        ui.label("To");
        select_combo(ui, doc, ids::TARGET_LANGUAGE, 180.0);
        ui.label("Model");
        select_combo(ui, doc, ids::TRANSLATION_MODEL, 320.0);
    });

    ui.add_space(8.0);
    if let Some(input) = doc.element_mut(ids::INPUT_TEXT) {
        let response = ui.add(
            egui::TextEdit::multiline(&mut input.value)
                .hint_text("Enter text to translate or summarize...")
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            pending.push(UserEvent::InputChanged(input.value.clone()));
        }
    }
    stats_label(ui, doc, ids::INPUT_STATS);

    ui.horizontal(|ui| {
        if action_button(ui, doc, ids::TRANSLATE_BUTTON) {
            pending.push(UserEvent::Translate);
        }
        spinner(ui, doc, ids::TRANSLATE_SPINNER);
        if action_button(ui, doc, ids::CLEAR_BUTTON) {
            pending.push(UserEvent::ClearInput);
        }
    });

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Result").strong());
    let mut output = doc.value(ids::OUTPUT_TEXT).unwrap_or_default();
    ui.add(
        egui::TextEdit::multiline(&mut output)
            .desired_rows(8)
            .desired_width(f32::INFINITY),
    );
    stats_label(ui, doc, ids::OUTPUT_STATS);
    ui.horizontal(|ui| {
        if action_button(ui, doc, ids::COPY_BUTTON) {
            pending.push(UserEvent::CopyOutput);
        }
        if action_button(ui, doc, ids::DOWNLOAD_BUTTON) {
            pending.push(UserEvent::DownloadOutput);
        }
    });
}

fn show_summarizer(ui: &mut egui::Ui, doc: &mut Document, pending: &mut Vec<UserEvent>) {
    ui.label(egui::RichText::new("Summarize").strong().size(16.0));
    egui::Grid::new("summary_options")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Source");
            radio_row(ui, doc, ids::SUMMARY_SOURCE);
            ui.end_row();
            ui.label("Length");
            radio_row(ui, doc, ids::SUMMARY_LENGTH);
            ui.end_row();
            ui.label("Format");
            radio_row(ui, doc, ids::SUMMARY_FORMAT);
            ui.end_row();
            ui.label("Model");
            select_combo(ui, doc, ids::SUMMARIZATION_MODEL, 320.0);
            ui.end_row();
        });

    ui.horizontal(|ui| {
        if action_button(ui, doc, ids::SUMMARIZE_BUTTON) {
            pending.push(UserEvent::Summarize);
        }
        spinner(ui, doc, ids::SUMMARIZE_SPINNER);
    });
}

fn show_status_bar(ui: &mut egui::Ui, doc: &mut Document) {
    let Some(bar) = doc.element(ids::STATUS_BAR) else {
        return;
    };
    if bar.hidden {
        return;
    }
    let (fill, stroke) = status_colors(StatusKind::from_classes(bar));
    let message = bar.text.clone();

    let mut dismissed = false;
    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    dismissed = ui.button("Dismiss").clicked();
                });
            });
        });
    if dismissed {
        hide_status(doc);
    }
}

fn select_combo(ui: &mut egui::Ui, doc: &mut Document, id: &str, width: f32) {
    let Some(select) = doc.element_mut(id) else {
        return;
    };
    let selected_text = select.selected_label().unwrap_or("-").to_string();
    let mut value = select.value.clone();
    ui.add_enabled_ui(!select.disabled, |ui| {
        egui::ComboBox::from_id_salt(id)
            .width(width)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for option in &select.options {
                    ui.selectable_value(&mut value, option.value.clone(), option.label.as_str());
                }
            });
    });
    select.value = value;
}

fn radio_row(ui: &mut egui::Ui, doc: &mut Document, name: &str) {
    let Some(group) = doc.radio_group_mut(name) else {
        return;
    };
    let mut checked = group.checked.clone();
    ui.horizontal(|ui| {
        for option in &group.options {
            ui.radio_value(&mut checked, Some(option.value.clone()), option.label.as_str());
        }
    });
    group.checked = checked;
}

fn action_button(ui: &mut egui::Ui, doc: &Document, id: &str) -> bool {
    let Some(element) = doc.element(id) else {
        return false;
    };
    if element.hidden {
        return false;
    }
    ui.scope(|ui| {
        ui.multiply_opacity(element.opacity);
        ui.add_enabled(!element.disabled, egui::Button::new(element.text.as_str()))
            .clicked()
    })
    .inner
}

fn spinner(ui: &mut egui::Ui, doc: &Document, id: &str) {
    if doc.element(id).is_some_and(|element| !element.hidden) {
        ui.add(egui::Spinner::new());
    }
}

fn stats_label(ui: &mut egui::Ui, doc: &Document, id: &str) {
    if let Some(stats) = doc.text(id) {
        ui.small(egui::RichText::new(stats).weak());
    }
}
