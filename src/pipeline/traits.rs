/// Decides which phone labels are syllable nuclei.
pub trait VowelClassifier: Send + Sync {
    fn is_vowel(&self, label: &str) -> bool;
}

/// Dictionary-style orthographic syllabification of one spelling.
pub trait WordHyphenator: Send + Sync {
    /// Ordered pieces whose concatenation is `word`.
    fn hyphenate(&self, word: &str) -> Vec<String>;
}
