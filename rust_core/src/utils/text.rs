//! Text normalization shared by the parser and matchers.
//!
//! Release titles separate words with dots, underscores, dashes or spaces
//! interchangeably, so everything is compared on a lowercase, single-spaced
//! form where any non-alphanumeric run becomes one space.

use rustc_hash::FxHashSet;

/// Lowercase and collapse every non-alphanumeric run into a single space.
/// Apostrophes are dropped so "O'Malley" and "OMalley" normalize alike.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.chars() {
        if c == '\'' || c == '\u{2019}' {
            continue;
        }
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(c.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Tokenize into normalized words
pub fn tokenize(s: &str) -> Vec<String> {
    normalize(s).split_whitespace().map(|w| w.to_string()).collect()
}

/// Normalized word set for membership checks.
pub fn token_set(s: &str) -> FxHashSet<String> {
    normalize(s).split_whitespace().map(|w| w.to_string()).collect()
}

/// Normalized text with all separators removed ("Abu.Dhabi" -> "abudhabi").
pub fn compact(s: &str) -> String {
    normalize(s).chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check if normalized text contains phrase as whole words (not substring of another word)
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let text_words: Vec<&str> = text.split_whitespace().collect();
    let phrase_words: Vec<&str> = phrase.split_whitespace().collect();

    if phrase_words.is_empty() || phrase_words.len() > text_words.len() {
        return false;
    }

    text_words
        .windows(phrase_words.len())
        .any(|window| window == phrase_words.as_slice())
}

/// Whole-phrase containment that also accepts a multi-word phrase written
/// as one run ("abu dhabi" found in "f1 abudhabi gp").
pub fn contains_phrase_or_joined(text: &str, phrase: &str) -> bool {
    if contains_phrase(text, phrase) {
        return true;
    }
    if !phrase.contains(' ') {
        return false;
    }
    let joined: String = phrase.split_whitespace().collect();
    text.split_whitespace().any(|w| w == joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("F1.2024.Abu_Dhabi-GP  FP1"), "f1 2024 abu dhabi gp fp1");
        assert_eq!(normalize("...UFC.299..."), "ufc 299");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_drops_apostrophes() {
        assert_eq!(normalize("O'Malley vs. Vera"), "omalley vs vera");
        assert_eq!(normalize("Dana White’s Contender Series"), "dana whites contender series");
    }

    #[test]
    fn test_normalize_non_ascii() {
        assert_eq!(normalize("São.Paulo"), "são paulo");
        assert_eq!(normalize("日本 GP"), "日本 gp");
    }

    #[test]
    fn test_contains_phrase_whole_words() {
        assert!(contains_phrase("f1 2024 brazil grand prix", "grand prix"));
        assert!(contains_phrase("f1 2024 brazil grand prix", "brazil"));
        assert!(!contains_phrase("spain grand prix", "spa"));
        assert!(!contains_phrase("grand", "grand prix"));
        assert!(!contains_phrase("anything", ""));
    }

    #[test]
    fn test_contains_phrase_or_joined() {
        assert!(contains_phrase_or_joined("f1 2024 abudhabi gp", "abu dhabi"));
        assert!(contains_phrase_or_joined("f1 2024 abu dhabi gp", "abu dhabi"));
        assert!(!contains_phrase_or_joined("f1 2024 abudhabigp", "abu dhabi"));
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact("Las.Vegas GP"), "lasvegasgp");
    }
}
