//! In-memory document model: elements addressed by fixed identifiers, radio
//! groups addressed by name, and root attributes.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Instant,
};

pub mod ids {
    pub const INPUT_TEXT: &str = "inputText";
    pub const INPUT_STATS: &str = "inputStats";
    pub const OUTPUT_TEXT: &str = "outputText";
    pub const OUTPUT_STATS: &str = "outputStats";

    pub const SOURCE_LANGUAGE: &str = "sourceLang";
    pub const TARGET_LANGUAGE: &str = "targetLang";
    pub const SWAP_LANGUAGES: &str = "swapLangs";
    pub const TRANSLATION_MODEL: &str = "translationModel";
    pub const SUMMARIZATION_MODEL: &str = "summarizationModel";

    pub const TRANSLATE_BUTTON: &str = "translateBtn";
    pub const TRANSLATE_SPINNER: &str = "translateSpinner";
    pub const SUMMARIZE_BUTTON: &str = "summarizeBtn";
    pub const SUMMARIZE_SPINNER: &str = "summarizeSpinner";
    pub const CLEAR_BUTTON: &str = "clearBtn";
    pub const COPY_BUTTON: &str = "copyBtn";
    pub const DOWNLOAD_BUTTON: &str = "downloadBtn";
    pub const THEME_TOGGLE: &str = "themeToggle";

    pub const STATUS_BAR: &str = "statusBar";

    pub const SUMMARY_SOURCE: &str = "summarySource";
    pub const SUMMARY_LENGTH: &str = "summaryLength";
    pub const SUMMARY_FORMAT: &str = "summaryFormat";

    pub const THEME_ATTRIBUTE: &str = "data-theme";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub value: String,
    pub text: String,
    pub disabled: bool,
    pub hidden: bool,
    /// Opacity of the element's label, 0.0..=1.0.
    pub opacity: f32,
    pub classes: BTreeSet<String>,
    pub options: Vec<SelectOption>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            value: String::new(),
            text: String::new(),
            disabled: false,
            hidden: false,
            opacity: 1.0,
            classes: BTreeSet::new(),
            options: Vec::new(),
        }
    }
}

impl Element {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::default()
        }
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        let value = options
            .first()
            .map(|option| option.value.clone())
            .unwrap_or_default();
        Self {
            value,
            options,
            ..Self::default()
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Selected option label, if the value matches one of the options.
    pub fn selected_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == self.value)
            .map(|option| option.label.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RadioGroup {
    pub options: Vec<SelectOption>,
    pub checked: Option<String>,
}

impl RadioGroup {
    pub fn new(options: Vec<SelectOption>, checked: Option<&str>) -> Self {
        Self {
            options,
            checked: checked.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    radio_groups: BTreeMap<String, RadioGroup>,
    root_attributes: BTreeMap<String, String>,
    status_hide_at: Option<Instant>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The translator page: every element the controller and the shell address.
    pub fn text_tools_page() -> Self {
        use self::ids::*;

        Self::new()
            .with_element(INPUT_TEXT, Element::default())
            .with_element(INPUT_STATS, Element::text("Characters: 0 | Words: 0"))
            .with_element(OUTPUT_TEXT, Element::default())
            .with_element(OUTPUT_STATS, Element::text("Characters: 0 | Words: 0"))
            .with_element(
                SOURCE_LANGUAGE,
                Element::select(vec![SelectOption::new("auto", "Auto-detect")]),
            )
            .with_element(TARGET_LANGUAGE, Element::select(Vec::new()))
            .with_element(SWAP_LANGUAGES, Element::text("⇄"))
            .with_element(
                TRANSLATION_MODEL,
                Element::select(vec![
                    SelectOption::new("nllb", "NLLB-200 Distilled (Best for Indian Languages)"),
                    SelectOption::new("opus", "Helsinki-NLP OPUS (Fast)"),
                    SelectOption::new("mbart", "mBART-50 (Multilingual)"),
                ]),
            )
            .with_element(
                SUMMARIZATION_MODEL,
                Element::select(vec![
                    SelectOption::new("bart", "BART-large-CNN (Best Quality)"),
                    SelectOption::new("distilbart", "DistilBART (Faster)"),
                    SelectOption::new("t5", "T5-base (Balanced)"),
                ]),
            )
            .with_element(TRANSLATE_BUTTON, Element::text("Translate"))
            .with_element(TRANSLATE_SPINNER, Element::hidden())
            .with_element(SUMMARIZE_BUTTON, Element::text("Summarize"))
            .with_element(SUMMARIZE_SPINNER, Element::hidden())
            .with_element(CLEAR_BUTTON, Element::text("Clear"))
            .with_element(COPY_BUTTON, Element::text("Copy").disabled())
            .with_element(DOWNLOAD_BUTTON, Element::text("Download").disabled())
            .with_element(THEME_TOGGLE, Element::text("🌙"))
            .with_element(STATUS_BAR, Element::hidden())
            .with_radio_group(
                SUMMARY_SOURCE,
                RadioGroup::new(
                    vec![
                        SelectOption::new("original", "Original Text"),
                        SelectOption::new("translated", "Translated Text"),
                    ],
                    Some("original"),
                ),
            )
            .with_radio_group(
                SUMMARY_LENGTH,
                RadioGroup::new(
                    vec![
                        SelectOption::new("short", "Short"),
                        SelectOption::new("medium", "Medium"),
                        SelectOption::new("long", "Long"),
                    ],
                    Some("short"),
                ),
            )
            .with_radio_group(
                SUMMARY_FORMAT,
                RadioGroup::new(
                    vec![
                        SelectOption::new("paragraph", "Paragraph"),
                        SelectOption::new("bullets", "Bullet Points"),
                    ],
                    Some("paragraph"),
                ),
            )
    }

    pub fn with_element(mut self, id: &str, element: Element) -> Self {
        self.elements.insert(id.to_string(), element);
        self
    }

    pub fn with_radio_group(mut self, name: &str, group: RadioGroup) -> Self {
        self.radio_groups.insert(name.to_string(), group);
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.element(id).map(|element| element.value.as_str())
    }

    /// Returns false when the element is absent.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|element| element.text.as_str())
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(element) = self.element_mut(id) {
            element.disabled = disabled;
        }
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.element(id).is_some_and(|element| element.disabled)
    }

    pub fn radio_group(&self, name: &str) -> Option<&RadioGroup> {
        self.radio_groups.get(name)
    }

    pub fn radio_group_mut(&mut self, name: &str) -> Option<&mut RadioGroup> {
        self.radio_groups.get_mut(name)
    }

    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(String::as_str)
    }

    pub fn set_root_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.root_attributes.insert(name.to_string(), value.into());
    }

    pub fn status_hide_at(&self) -> Option<Instant> {
        self.status_hide_at
    }

    pub(crate) fn set_status_hide_at(&mut self, deadline: Option<Instant>) {
        self.status_hide_at = deadline;
    }
}

/// Shared handle to the page. Locks are short and never held across `.await`.
#[derive(Debug, Clone, Default)]
pub struct DocumentHandle(Arc<Mutex<Document>>);

impl DocumentHandle {
    pub fn new(document: Document) -> Self {
        Self(Arc::new(Mutex::new(document)))
    }

    pub fn lock(&self) -> MutexGuard<'_, Document> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_starts_with_output_actions_disabled() {
        let doc = Document::text_tools_page();
        assert!(doc.is_disabled(ids::COPY_BUTTON));
        assert!(doc.is_disabled(ids::DOWNLOAD_BUTTON));
        assert!(!doc.is_disabled(ids::TRANSLATE_BUTTON));
        assert!(doc.element(ids::TRANSLATE_SPINNER).expect("spinner").hidden);
        assert_eq!(doc.value(ids::SOURCE_LANGUAGE), Some("auto"));
        assert_eq!(
            doc.radio_group(ids::SUMMARY_SOURCE)
                .and_then(|group| group.checked.as_deref()),
            Some("original")
        );
    }

    #[test]
    fn accessors_report_missing_elements() {
        let mut doc = Document::new();
        assert_eq!(doc.value("nope"), None);
        assert!(!doc.set_value("nope", "x"));
        assert!(!doc.set_text("nope", "x"));
        doc.set_disabled("nope", true);
        assert!(!doc.is_disabled("nope"));
    }

    #[test]
    fn select_defaults_to_first_option() {
        let select = Element::select(vec![
            SelectOption::new("en", "English"),
            SelectOption::new("hi", "Hindi"),
        ]);
        assert_eq!(select.value, "en");
        assert_eq!(select.selected_label(), Some("English"));
        assert_eq!(Element::select(Vec::new()).selected_label(), None);
    }

    #[test]
    fn handle_updates_are_visible_to_clones() {
        let handle = DocumentHandle::new(Document::text_tools_page());
        let other = handle.clone();
        handle.update(|doc| doc.set_value(ids::INPUT_TEXT, "hello"));
        assert_eq!(
            other.read(|doc| doc.value(ids::INPUT_TEXT).map(str::to_string)),
            Some("hello".to_string())
        );
    }
}
