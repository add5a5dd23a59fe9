use crate::config::PipelineConfig;
use crate::error::SyllableError;
use crate::pipeline::defaults::{DictionaryHyphenator, StressDigitClassifier};
use crate::pipeline::runtime::{SyllableAligner, SyllableAlignerParts};
use crate::pipeline::traits::{VowelClassifier, WordHyphenator};

pub struct SyllableAlignerBuilder {
    config: PipelineConfig,
    vowel_classifier: Option<Box<dyn VowelClassifier>>,
    hyphenator: Option<Box<dyn WordHyphenator>>,
}

impl SyllableAlignerBuilder {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            vowel_classifier: None,
            hyphenator: None,
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_vowel_classifier(mut self, vowel_classifier: Box<dyn VowelClassifier>) -> Self {
        self.vowel_classifier = Some(vowel_classifier);
        self
    }

    pub fn with_hyphenator(mut self, hyphenator: Box<dyn WordHyphenator>) -> Self {
        self.hyphenator = Some(hyphenator);
        self
    }

    pub fn build(self) -> Result<SyllableAligner, SyllableError> {
        self.config.validate()?;

        let hyphenator = match self.hyphenator {
            Some(hyphenator) => hyphenator,
            None => Box::new(DictionaryHyphenator::new(&self.config.hyphenation_language)?),
        };

        Ok(SyllableAligner::from_parts(SyllableAlignerParts {
            config: self.config,
            vowel_classifier: self
                .vowel_classifier
                .unwrap_or_else(|| Box::new(StressDigitClassifier)),
            hyphenator,
        }))
    }
}
