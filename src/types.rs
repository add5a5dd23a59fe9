use serde::{Deserialize, Serialize};

/// One timed label from a forced-alignment tier. Times are seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedLabel {
    pub label: String,
    pub start: f64,
    pub end: f64,
}

impl TimedLabel {
    pub fn new(label: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// True when `self` lies inside `outer`, boundaries included.
    pub fn is_within(&self, outer: &TimedLabel) -> bool {
        self.start >= outer.start && self.end <= outer.end
    }
}

pub type PhoneInterval = TimedLabel;
pub type WordInterval = TimedLabel;

/// The `phones` and `words` tiers of one alignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalTiers {
    pub phones: Vec<PhoneInterval>,
    pub words: Vec<WordInterval>,
}

/// Sequence number of a word instance inside one alignment.
///
/// Two occurrences of the same spelling get distinct numbers, so this is the
/// join key between the phonetic and orthographic stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordOccurrence(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct WordPhones {
    pub occurrence: WordOccurrence,
    pub word: WordInterval,
    pub phones: Vec<PhoneInterval>,
}

/// Output of the phonetic stage for one syllable.
#[derive(Debug, Clone, PartialEq)]
pub struct Syllable {
    pub word: String,
    /// Concatenated phone labels, e.g. `HH AE1 P` -> `HHAE1P`.
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub occurrence: WordOccurrence,
    pub syl_count: usize,
    pub syl_index: usize,
}

/// Syllable after orthographic reconciliation, before pitch is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllableRow {
    pub word: String,
    pub syllable: String,
    pub start: f64,
    pub end: f64,
    pub syl: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencySample {
    pub time: f64,
    pub frequency: f64,
    pub confidence: f64,
}

/// Final table row. Column order is the output contract:
/// `word, syllable, start, end, syl, f0_freq, pitch, midi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllableRecord {
    pub word: String,
    pub syllable: String,
    pub start: f64,
    pub end: f64,
    pub syl: String,
    pub f0_freq: Option<f64>,
    pub pitch: Option<String>,
    pub midi: Option<f64>,
}

impl SyllableRecord {
    pub fn from_row(row: SyllableRow, melody: MelodyEstimate) -> Self {
        Self {
            word: row.word,
            syllable: row.syllable,
            start: row.start,
            end: row.end,
            syl: row.syl,
            f0_freq: melody.f0_freq,
            pitch: melody.pitch,
            midi: melody.midi,
        }
    }
}

/// Pitch fields for one syllable. All `None` when the window held no usable frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MelodyEstimate {
    pub f0_freq: Option<f64>,
    pub pitch: Option<String>,
    pub midi: Option<f64>,
}

impl MelodyEstimate {
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn is_missing(&self) -> bool {
        self.f0_freq.is_none() && self.pitch.is_none() && self.midi.is_none()
    }
}
