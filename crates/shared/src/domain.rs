use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Language code the backend treats as "detect the source language".
pub const AUTO_DETECT: &str = "auto";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native: String,
}

impl Language {
    pub fn is_auto_detect(&self) -> bool {
        self.code == AUTO_DETECT
    }

    pub fn display_label(&self) -> String {
        if self.name == self.native {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.native)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
}

macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

wire_enum!(ModelKind {
    Translation => "translation",
    Summarization => "summarization",
});

wire_enum!(SummaryLength {
    Short => "short",
    Medium => "medium",
    Long => "long",
});

wire_enum!(SummaryFormat {
    Paragraph => "paragraph",
    Bullets => "bullets",
});

wire_enum!(SummarySource {
    Original => "original",
    Translated => "translated",
});

wire_enum!(Theme {
    Light => "light",
    Dark => "dark",
});

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the theme toggle: the icon of the theme you would switch to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_skips_duplicate_native_name() {
        let english = Language {
            code: "en".to_string(),
            name: "English".to_string(),
            native: "English".to_string(),
        };
        let hindi = Language {
            code: "hi".to_string(),
            name: "Hindi".to_string(),
            native: "हिन्दी".to_string(),
        };
        assert_eq!(english.display_label(), "English");
        assert_eq!(hindi.display_label(), "Hindi (हिन्दी)");
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_eq!(Theme::Light.icon(), "🌙");
    }

    #[test]
    fn wire_enums_parse_case_insensitively() {
        assert_eq!("Medium".parse::<SummaryLength>(), Ok(SummaryLength::Medium));
        assert_eq!(" bullets ".parse::<SummaryFormat>(), Ok(SummaryFormat::Bullets));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Summarization".parse::<ModelKind>(),
            Ok(ModelKind::Summarization)
        );
        let err = "sepia".parse::<Theme>().expect_err("unknown theme");
        assert_eq!(err.to_string(), "unknown Theme value 'sepia'");
    }

    #[test]
    fn summary_settings_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&SummaryLength::Long).expect("json"),
            "\"long\""
        );
        assert_eq!(SummaryFormat::default(), SummaryFormat::Paragraph);
        assert_eq!(SummarySource::default(), SummarySource::Original);
    }
}
