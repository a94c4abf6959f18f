use shared::domain::Language;

/// In-memory state for one run of the app; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub languages: Vec<Language>,
    pub input_text: String,
    pub output_text: String,
}

impl SessionState {
    /// Whitespace-only output counts as none.
    pub fn has_output(&self) -> bool {
        !self.output_text.trim().is_empty()
    }
}
