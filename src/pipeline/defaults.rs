use hyphenation::{Hyphenator, Language, Load, Standard};

use crate::alignment::syllabify::is_stress_marked_vowel;
use crate::error::SyllableError;
use crate::pipeline::traits::{VowelClassifier, WordHyphenator};

/// Trailing stress digit marks a vowel (ARPAbet as emitted by MFA `english_us_arpa`).
pub struct StressDigitClassifier;

impl VowelClassifier for StressDigitClassifier {
    fn is_vowel(&self, label: &str) -> bool {
        is_stress_marked_vowel(label)
    }
}

/// Shortest leading and trailing fragment a break may leave.
const BREAK_MARGINS: (usize, usize) = (2, 2);

/// Liang-pattern hyphenation backed by the dictionaries embedded in `hyphenation`.
pub struct DictionaryHyphenator {
    dictionary: Standard,
}

impl DictionaryHyphenator {
    pub fn new(language_tag: &str) -> Result<Self, SyllableError> {
        let language = parse_language(language_tag)?;
        let mut dictionary = Standard::from_embedded(language)
            .map_err(|e| SyllableError::runtime("load hyphenation dictionary", e))?;
        // The embedded en-US margins are (2, 3), which never split "happy" or "army".
        dictionary.minima = BREAK_MARGINS;
        Ok(Self { dictionary })
    }

    pub fn english_us() -> Result<Self, SyllableError> {
        Self::new("en-us")
    }
}

impl WordHyphenator for DictionaryHyphenator {
    fn hyphenate(&self, word: &str) -> Vec<String> {
        // Patterns are lowercase. ASCII lowercasing keeps byte offsets, so breaks
        // found on the folded form can slice the original spelling.
        let breaks = if word.is_ascii() {
            let folded = word.to_ascii_lowercase();
            self.dictionary.hyphenate(&folded).breaks
        } else {
            self.dictionary.hyphenate(word).breaks
        };
        split_at_breaks(word, &breaks)
    }
}

fn parse_language(tag: &str) -> Result<Language, SyllableError> {
    match tag.to_ascii_lowercase().replace('_', "-").as_str() {
        "en-us" | "en" => Ok(Language::EnglishUS),
        other => Err(SyllableError::invalid_input(format!(
            "unsupported hyphenation language '{other}' (only en-us is embedded)"
        ))),
    }
}

fn split_at_breaks(word: &str, breaks: &[usize]) -> Vec<String> {
    let mut pieces = Vec::with_capacity(breaks.len() + 1);
    let mut prev = 0usize;
    for &at in breaks {
        if at <= prev || at >= word.len() || !word.is_char_boundary(at) {
            continue;
        }
        pieces.push(word[prev..at].to_string());
        prev = at;
    }
    pieces.push(word[prev..].to_string());
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_digit_classifier() {
        let classifier = StressDigitClassifier;
        assert!(classifier.is_vowel("AH0"));
        assert!(!classifier.is_vowel("T"));
    }

    #[test]
    fn split_at_breaks_slices_original_spelling() {
        assert_eq!(split_at_breaks("Happy", &[3]), vec!["Hap", "py"]);
        assert_eq!(split_at_breaks("about", &[]), vec!["about"]);
        assert_eq!(split_at_breaks("abc", &[0, 1, 1, 3]), vec!["a", "bc"]);
    }

    #[test]
    fn unsupported_language_is_rejected() {
        assert!(parse_language("fr").is_err());
        assert!(matches!(parse_language("EN_US"), Ok(Language::EnglishUS)));
    }

    #[test]
    fn dictionary_pieces_rebuild_the_word() {
        let hyphenator = DictionaryHyphenator::english_us().expect("embedded en-us dictionary");
        for word in ["happy", "Wonderful", "hyphenation", "a", "everybody"] {
            let pieces = hyphenator.hyphenate(word);
            assert!(!pieces.is_empty());
            assert!(pieces.iter().all(|p| !p.is_empty()), "word={word}");
            assert_eq!(pieces.concat(), word);
        }
    }

    #[test]
    fn dictionary_splits_multisyllabic_words() {
        let hyphenator = DictionaryHyphenator::english_us().expect("embedded en-us dictionary");
        assert!(hyphenator.hyphenate("hyphenation").len() > 1);
        assert_eq!(hyphenator.hyphenate("a"), vec!["a"]);
    }

    #[test]
    fn two_letter_final_syllables_are_split() {
        let hyphenator = DictionaryHyphenator::english_us().expect("embedded en-us dictionary");
        assert_eq!(hyphenator.hyphenate("happy"), vec!["hap", "py"]);
        assert_eq!(hyphenator.hyphenate("Happy"), vec!["Hap", "py"]);
        assert_eq!(hyphenator.hyphenate("lady"), vec!["la", "dy"]);
    }
}
