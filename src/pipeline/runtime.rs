use std::borrow::Cow;

use rayon::prelude::*;

use crate::alignment::extraction::extract_word_phones;
use crate::alignment::melody::{aggregate_syllable, is_time_ordered};
use crate::alignment::orthography::reconcile_word;
use crate::alignment::syllabify::syllabify_word;
use crate::config::PipelineConfig;
use crate::error::SyllableError;
use crate::pipeline::traits::{VowelClassifier, WordHyphenator};
use crate::types::{
    FrequencySample, IntervalTiers, Syllable, SyllableRecord, SyllableRow, WordPhones,
};

pub struct SyllableAligner {
    config: PipelineConfig,
    vowel_classifier: Box<dyn VowelClassifier>,
    hyphenator: Box<dyn WordHyphenator>,
}

pub(crate) struct SyllableAlignerParts {
    pub config: PipelineConfig,
    pub vowel_classifier: Box<dyn VowelClassifier>,
    pub hyphenator: Box<dyn WordHyphenator>,
}

impl SyllableAligner {
    pub(crate) fn from_parts(parts: SyllableAlignerParts) -> Self {
        Self {
            config: parts.config,
            vowel_classifier: parts.vowel_classifier,
            hyphenator: parts.hyphenator,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Phonetic syllables of one word occurrence.
    pub fn syllabify_word(&self, word: &WordPhones) -> Vec<Syllable> {
        syllabify_word(word, |label| self.vowel_classifier.is_vowel(label))
    }

    /// Phone/word tiers to the syllable table (phonetic text plus orthographic `syl`).
    ///
    /// Fails only when the tiers cannot be extracted at all. A word that cannot be
    /// reconciled still yields its phonetic rows, with an empty `syl`.
    pub fn syllabify(&self, tiers: &IntervalTiers) -> Result<Vec<SyllableRow>, SyllableError> {
        let words = extract_word_phones(tiers)?;
        let per_word = words
            .par_iter()
            .map(|word| self.rows_for_word(word))
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        let mut unreconciled = 0usize;
        for word_rows in per_word {
            let (word_rows, reconciled) = word_rows?;
            if !reconciled {
                unreconciled += 1;
            }
            rows.extend(word_rows);
        }

        tracing::info!(
            words = words.len(),
            syllables = rows.len(),
            unreconciled_words = unreconciled,
            "syllabify: table built"
        );
        Ok(rows)
    }

    /// Rows of one word, and whether its orthographic text could be assigned.
    fn rows_for_word(&self, word: &WordPhones) -> Result<(Vec<SyllableRow>, bool), SyllableError> {
        let syllables = self.syllabify_word(word);
        let Some(first) = syllables.first() else {
            return Ok((Vec::new(), true));
        };

        let orthography = reconcile_word(&word.word.label, first.syl_count, |spelling| {
            self.hyphenator.hyphenate(spelling)
        });
        let (pieces, reconciled) = match orthography {
            Ok(orthography) => (orthography.pieces, true),
            Err(err) if err.is_unit_local() => {
                tracing::warn!(
                    occurrence = word.occurrence.0,
                    error = %err,
                    "syllabify: orthography missing for word"
                );
                (vec![String::new(); syllables.len()], false)
            }
            Err(err) => return Err(err),
        };

        let rows = syllables
            .into_iter()
            .zip(pieces)
            .map(|(syllable, syl)| SyllableRow {
                word: syllable.word,
                syllable: syllable.text,
                start: syllable.start,
                end: syllable.end,
                syl,
            })
            .collect();
        Ok((rows, reconciled))
    }

    /// Attach `f0_freq`, `pitch` and `midi` to every row. Timing and text fields
    /// are carried over unchanged and the output has one record per input row.
    pub fn attach_melody(
        &self,
        rows: Vec<SyllableRow>,
        track: &[FrequencySample],
    ) -> Vec<SyllableRecord> {
        let track: Cow<'_, [FrequencySample]> = if is_time_ordered(track) {
            Cow::Borrowed(track)
        } else {
            tracing::warn!(
                frames = track.len(),
                "melody: frequency track is not time-ordered; sorting a copy"
            );
            let mut sorted = track.to_vec();
            sorted.sort_by(|a, b| a.time.total_cmp(&b.time));
            Cow::Owned(sorted)
        };
        let melody_config = self.config.melody;

        let records = rows
            .into_par_iter()
            .map(|row| {
                let estimate = aggregate_syllable(&track, row.start, row.end, &melody_config);
                SyllableRecord::from_row(row, estimate)
            })
            .collect::<Vec<_>>();

        let missing = records.iter().filter(|r| r.pitch.is_none()).count();
        tracing::info!(
            syllables = records.len(),
            missing_pitch = missing,
            "melody: pitch attached"
        );
        records
    }

    /// Both stages end to end.
    pub fn run(
        &self,
        tiers: &IntervalTiers,
        track: &[FrequencySample],
    ) -> Result<Vec<SyllableRecord>, SyllableError> {
        let rows = self.syllabify(tiers)?;
        Ok(self.attach_melody(rows, track))
    }
}
