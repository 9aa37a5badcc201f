//! Word extraction for the diversity metrics.
//!
//! Both modes lowercase the input and return matches in source order.
//!
//! Input is assumed to be NFC. Combining marks count as word characters, so
//! decomposed accents stay attached in loose mode and break strict matches.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Runs of three or more Latin letters, Latin-1 accented range included.
static STRICT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-ZÀ-ÿ]{3,}\b").expect("valid regex"));

/// Runs of Unicode word characters of any length.
static LOOSE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Which word pattern to extract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TokenizeMode {
    /// Letters only, at least three of them. Digits, punctuation and short
    /// function words ("o", "e", "de") are discarded.
    #[default]
    Strict,
    /// Letters, digits and underscore, any length.
    Loose,
}

impl TokenizeMode {
    /// Returns the mode name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Loose => "loose",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Strict => &STRICT_WORD,
            Self::Loose => &LOOSE_WORD,
        }
    }
}

impl std::fmt::Display for TokenizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase `text` and extract its words under `mode`.
///
/// Empty or whitespace-only input yields no words.
pub fn tokenize(text: &str, mode: TokenizeMode) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    mode.pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_drops_short_words_and_digits() {
        let words = tokenize("O gato e 42 ratos, de novo!", TokenizeMode::Strict);
        assert_eq!(words, vec!["gato", "ratos", "novo"]);
    }

    #[test]
    fn combining_marks_are_word_characters() {
        // "i" + U+0307 stays a single loose token
        let words = tokenize("i\u{307}stanbul", TokenizeMode::Loose);
        assert_eq!(words, vec!["i\u{307}stanbul"]);
        // decomposed "coração" has no run of precomposed letters
        let words = tokenize("corac\u{327}a\u{303}o", TokenizeMode::Strict);
        assert!(words.is_empty());
        assert_eq!(tokenize("coração", TokenizeMode::Strict), vec!["coração"]);
    }

    #[test]
    fn strict_keeps_accented_letters() {
        let words = tokenize("Ação, CORAÇÃO e pés", TokenizeMode::Strict);
        assert_eq!(words, vec!["ação", "coração", "pés"]);
    }

    #[test]
    fn strict_rejects_letters_glued_to_digits() {
        assert!(tokenize("abc123 x_yz", TokenizeMode::Strict).is_empty());
    }

    #[test]
    fn loose_keeps_everything_wordlike() {
        let words = tokenize("O gato_1 viu 3 ratos.", TokenizeMode::Loose);
        assert_eq!(words, vec!["o", "gato_1", "viu", "3", "ratos"]);
    }

    #[test]
    fn empty_input_has_no_words() {
        assert!(tokenize("", TokenizeMode::Strict).is_empty());
        assert!(tokenize("   \n\t", TokenizeMode::Loose).is_empty());
        assert!(tokenize("?!.,;", TokenizeMode::Loose).is_empty());
    }

    #[test]
    fn mode_serializes_kebab_case() {
        let json = serde_json::to_string(&TokenizeMode::Loose).unwrap();
        assert_eq!(json, "\"loose\"");
        assert_eq!(TokenizeMode::default(), TokenizeMode::Strict);
    }
}
