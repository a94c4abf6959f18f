use std::{collections::HashMap, fs, path::Path};

use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const SETTINGS_FILE: &str = "text_tools.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

/// Defaults, then `text_tools.toml` in the working directory, then the
/// environment.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_base_url") {
                    settings.api_base_url = v.clone();
                }
            }
            Err(err) => warn!(path = %file.display(), "ignoring unreadable settings file: {err}"),
        }
    }

    if let Some(v) = env("TEXT_TOOLS_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn falls_back_to_local_backend() {
        let settings = load_settings_from(Path::new("does-not-exist.toml"), no_env);
        assert_eq!(settings, ClientSettings::default());
        assert_eq!(settings.api_base_url, "http://localhost:5000");
    }

    #[test]
    fn file_value_is_overridden_by_environment() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "api_base_url = \"http://10.0.0.5:5000\"").expect("write");

        let settings = load_settings_from(file.path(), no_env);
        assert_eq!(settings.api_base_url, "http://10.0.0.5:5000");

        let settings = load_settings_from(file.path(), |name| {
            (name == "TEXT_TOOLS_API_URL").then(|| "http://tools.internal:8080".to_string())
        });
        assert_eq!(settings.api_base_url, "http://tools.internal:8080");

        let settings = load_settings_from(file.path(), |name| match name {
            "TEXT_TOOLS_API_URL" => Some("http://first".to_string()),
            "APP__API_BASE_URL" => Some("http://second".to_string()),
            _ => None,
        });
        assert_eq!(settings.api_base_url, "http://second");
    }

    #[test]
    fn malformed_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "api_base_url = [unterminated").expect("write");

        let settings = load_settings_from(file.path(), no_env);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    }
}
