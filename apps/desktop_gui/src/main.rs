use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod platform;
mod ui;

use clap::Parser;
use client_core::{load_settings, ApiClient, ClientSettings};
use crossbeam_channel::bounded;
use eframe::egui;

use crate::{
    controller::{Controller, ControllerOptions, UserEvent},
    platform::{DownloadsFolder, FilePreferenceStore, Platform, SystemClipboard},
    ui::{
        dom::{Document, DocumentHandle},
        AppPaths, StartupConfig, TextToolsApp,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Arjun AI Text Tools desktop client")]
struct Args {
    /// Backend base URL; overrides text_tools.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Directory for persisted preferences.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Target language selected after the language list loads.
    #[arg(long, default_value = controller::actions::DEFAULT_TARGET_LANGUAGE)]
    default_target: String,
}

impl Args {
    fn into_startup(self) -> StartupConfig {
        StartupConfig {
            api_base_url: self.api_url,
            data_dir: self.data_dir,
            default_target_language: self.default_target,
        }
    }
}

fn resolve_settings(startup: &StartupConfig) -> ClientSettings {
    let mut settings = load_settings();
    if let Some(url) = &startup.api_base_url {
        settings.api_base_url = url.clone();
    }
    settings
}

fn build_controller(startup: &StartupConfig, document: DocumentHandle) -> anyhow::Result<Controller> {
    let settings = resolve_settings(startup);
    let api = ApiClient::from_settings(&settings)?;
    tracing::info!(api = api.base_url(), "using text tools backend");

    let paths = AppPaths::from_startup(startup)?;
    tracing::info!(profile = %paths.data_root.display(), "using preference profile");
    let platform = Platform {
        clipboard: Arc::new(SystemClipboard),
        downloads: Arc::new(DownloadsFolder::user_default()),
        preferences: Arc::new(FilePreferenceStore::open(&paths.preferences_path)),
    };

    Ok(Controller::new(
        Arc::new(api),
        document,
        platform,
        ControllerOptions {
            default_target_language: startup.default_target_language.clone(),
        },
    ))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let startup = Args::parse().into_startup();

    let document = DocumentHandle::new(Document::text_tools_page());
    let controller = build_controller(&startup, document.clone())?;

    let (event_tx, event_rx) = bounded::<UserEvent>(256);
    backend_bridge::runtime::launch(event_rx, controller);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Arjun AI Text Tools")
            .with_inner_size([960.0, 820.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Arjun AI Text Tools",
        options,
        Box::new(move |_cc| Ok(Box::new(TextToolsApp::new(document, event_tx)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop shell failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_map_onto_startup_config() {
        let startup = Args::parse_from([
            "text_tools_gui",
            "--api-url",
            "http://10.0.0.5:5000",
            "--default-target",
            "bn",
        ])
        .into_startup();
        assert_eq!(startup.api_base_url.as_deref(), Some("http://10.0.0.5:5000"));
        assert_eq!(startup.default_target_language, "bn");
        assert_eq!(startup.data_dir, None);
    }

    #[test]
    fn explicit_api_url_overrides_loaded_settings() {
        let startup = StartupConfig {
            api_base_url: Some("http://127.0.0.1:9000".to_string()),
            ..StartupConfig::default()
        };
        assert_eq!(resolve_settings(&startup).api_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn controller_builds_against_local_profile() {
        let dir = tempfile::tempdir().expect("tempdir");
        let startup = StartupConfig {
            api_base_url: Some("http://localhost:5000".to_string()),
            data_dir: Some(dir.path().to_path_buf()),
            ..StartupConfig::default()
        };
        let controller =
            build_controller(&startup, DocumentHandle::default()).expect("controller");
        assert!(controller.session().languages.is_empty());

        let bad = StartupConfig {
            api_base_url: Some("ftp://example.com".to_string()),
            ..startup
        };
        assert!(build_controller(&bad, DocumentHandle::default()).is_err());
    }
}
