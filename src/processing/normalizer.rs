//! Text normalization for the vector space engine

use regex::Regex;

/// Canonicalizes raw document text into the lowercase, alphabetic-only,
/// whitespace-collapsed form the vectorizer tokenizes.
pub struct TextNormalizer {
    non_letter_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let non_letter_regex = Regex::new(r"[^a-z ]").expect("Invalid letter regex");
        let whitespace_regex = Regex::new(r" +").expect("Invalid whitespace regex");

        Self {
            non_letter_regex,
            whitespace_regex,
        }
    }

    /// Normalize a document: lowercase, replace every character that is
    /// not an ASCII letter or space with a space, collapse space runs,
    /// trim.
    ///
    /// Every document must pass through here exactly once before any
    /// scoring call; the vectorizer consumes the canonical form as-is and
    /// never re-normalizes.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let letters_only = self.non_letter_regex.replace_all(&lowered, " ");
        self.whitespace_regex
            .replace_all(&letters_only, " ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let normalizer = TextNormalizer::new();
        let text = "Senior Rust Engineer (2019-2024): built CLIs, parsers & tools!";

        let normalized = normalizer.normalize(text);

        assert_eq!(
            normalized,
            "senior rust engineer built clis parsers tools"
        );
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let normalizer = TextNormalizer::new();
        let text = "  python\t\tsql\n\ndata   analysis  ";

        assert_eq!(normalizer.normalize(text), "python sql data analysis");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("123 !@# 456"), "");
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let normalizer = TextNormalizer::new();
        let once = normalizer.normalize("Backend Development with Python 3.11");
        let twice = normalizer.normalize(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("café résumé"), "caf r sum");
    }
}
