//! Events the GUI shell raises for the controller.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    InputChanged(String),
    ClearInput,
    Translate,
    Summarize,
    CopyOutput,
    DownloadOutput,
    ToggleTheme,
    SwapLanguages,
}

impl UserEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UserEvent::InputChanged(_) => "input_changed",
            UserEvent::ClearInput => "clear_input",
            UserEvent::Translate => "translate",
            UserEvent::Summarize => "summarize",
            UserEvent::CopyOutput => "copy_output",
            UserEvent::DownloadOutput => "download_output",
            UserEvent::ToggleTheme => "toggle_theme",
            UserEvent::SwapLanguages => "swap_languages",
        }
    }

    /// Events that wait on the backend or the clipboard and so run as their
    /// own task instead of in arrival order.
    pub fn awaits_io(&self) -> bool {
        matches!(
            self,
            UserEvent::Translate | UserEvent::Summarize | UserEvent::CopyOutput
        )
    }
}

#[cfg(test)]
mod tests {
    use super::UserEvent;

    #[test]
    fn only_network_and_clipboard_events_await_io() {
        assert!(UserEvent::Translate.awaits_io());
        assert!(UserEvent::Summarize.awaits_io());
        assert!(UserEvent::CopyOutput.awaits_io());
        assert!(!UserEvent::InputChanged("x".to_string()).awaits_io());
        assert!(!UserEvent::DownloadOutput.awaits_io());
        assert_eq!(UserEvent::SwapLanguages.name(), "swap_languages");
    }
}
