use crate::error::ValidationError;

pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const MIN_SUMMARY_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
        }
    }

    pub fn display(&self) -> String {
        format!("Characters: {} | Words: {}", self.characters, self.words)
    }
}

/// Rejects empty or whitespace-only text, then text whose trimmed length is
/// below `min_length`.
pub fn validate_text(text: &str, min_length: usize) -> Result<(), ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if trimmed.chars().count() < min_length {
        return Err(ValidationError::TooShort { min_length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_characters_and_whitespace_tokens() {
        let stats = TextStats::of("Hello world");
        assert_eq!(stats, TextStats { characters: 11, words: 2 });
        assert_eq!(stats.display(), "Characters: 11 | Words: 2");

        assert_eq!(TextStats::of("  spaced\tout \n words  ").words, 3);
        assert_eq!(TextStats::of("नमस्ते").words, 1);
    }

    #[test]
    fn blank_text_has_zero_words() {
        assert_eq!(TextStats::of(""), TextStats::default());
        let blank = TextStats::of(" \n\t ");
        assert_eq!(blank.characters, 4);
        assert_eq!(blank.words, 0);
    }

    #[test]
    fn validation_rejects_blank_and_short_text() {
        assert_eq!(validate_text("", DEFAULT_MIN_LENGTH), Err(ValidationError::Empty));
        assert_eq!(validate_text("   ", 1), Err(ValidationError::Empty));
        assert_eq!(
            validate_text("   short   ", MIN_SUMMARY_LENGTH),
            Err(ValidationError::TooShort { min_length: 50 })
        );
        assert_eq!(validate_text("a", DEFAULT_MIN_LENGTH), Ok(()));
        assert_eq!(validate_text(&"x".repeat(50), MIN_SUMMARY_LENGTH), Ok(()));
    }

    #[test]
    fn minimum_length_counts_trimmed_text() {
        let padded_short = format!("{}{}", " ".repeat(10), "x".repeat(49));
        assert_eq!(padded_short.chars().count(), 59);
        assert_eq!(
            validate_text(&padded_short, MIN_SUMMARY_LENGTH),
            Err(ValidationError::TooShort { min_length: 50 })
        );
        assert_eq!(
            validate_text(&format!("  {}  ", "x".repeat(50)), MIN_SUMMARY_LENGTH),
            Ok(())
        );
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::Empty.to_string(), "Please enter some text");
        assert_eq!(
            ValidationError::TooShort { min_length: 50 }.to_string(),
            "Text must be at least 50 characters long"
        );
    }
}
