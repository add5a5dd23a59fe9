pub mod alignment;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use alignment::orthography::{reconcile_syllable, reconcile_word, Regime, WordOrthography};
pub use alignment::pitch::{freq_to_pitch, note_to_midi};
pub use config::{MelodyConfig, PipelineConfig};
pub use error::SyllableError;
pub use io::json_report::{write_report, SyllableReport};
pub use io::table_csv::{
    read_frequency_track, read_syllable_rows, write_records, write_syllable_rows,
};
pub use io::textgrid_tiers::{read_interval_tiers, write_syllable_textgrid};
pub use pipeline::builder::SyllableAlignerBuilder;
pub use pipeline::defaults::{DictionaryHyphenator, StressDigitClassifier};
pub use pipeline::runtime::SyllableAligner;
pub use pipeline::traits::{VowelClassifier, WordHyphenator};
pub use types::{
    FrequencySample, IntervalTiers, MelodyEstimate, PhoneInterval, Syllable, SyllableRecord,
    SyllableRow, TimedLabel, WordInterval, WordOccurrence, WordPhones,
};
