use std::fs::{self, File};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SyllableError;
use crate::types::{FrequencySample, SyllableRecord, SyllableRow};

/// Column contract of the pitch tracker output.
pub const FREQUENCY_COLUMNS: [&str; 3] = ["time", "frequency", "confidence"];
/// Column contract of the syllable table before pitch is attached.
pub const SYLLABLE_COLUMNS: [&str; 5] = ["word", "syllable", "start", "end", "syl"];
/// Column contract of the final table.
pub const RECORD_COLUMNS: [&str; 8] = [
    "word", "syllable", "start", "end", "syl", "f0_freq", "pitch", "midi",
];

/// Read a `time,frequency,confidence` track. The header must match exactly.
pub fn read_frequency_track(path: &Path) -> Result<Vec<FrequencySample>, SyllableError> {
    let track: Vec<FrequencySample> = read_rows(path, &FREQUENCY_COLUMNS, true)?;
    tracing::info!(path = %path.display(), frames = track.len(), "csv: frequency track loaded");
    Ok(track)
}

/// Read a syllable table. Only the leading `word,syllable,start,end,syl` columns
/// are required, so a table that already carries pitch columns can be re-read.
pub fn read_syllable_rows(path: &Path) -> Result<Vec<SyllableRow>, SyllableError> {
    let rows: Vec<SyllableRow> = read_rows(path, &SYLLABLE_COLUMNS, false)?;
    tracing::info!(path = %path.display(), syllables = rows.len(), "csv: syllable table loaded");
    Ok(rows)
}

pub fn write_syllable_rows(path: &Path, rows: &[SyllableRow]) -> Result<(), SyllableError> {
    write_rows(path, &SYLLABLE_COLUMNS, rows)
}

pub fn write_records(path: &Path, records: &[SyllableRecord]) -> Result<(), SyllableError> {
    write_rows(path, &RECORD_COLUMNS, records)
}

fn read_rows<T: DeserializeOwned>(
    path: &Path,
    columns: &[&str],
    exact: bool,
) -> Result<Vec<T>, SyllableError> {
    let file = File::open(path).map_err(|e| SyllableError::io("open CSV table", e))?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| SyllableError::csv("read CSV header", e))?
        .clone();
    let found = headers.iter().collect::<Vec<_>>();
    let matches = if exact {
        found == columns
    } else {
        found.len() >= columns.len() && found[..columns.len()] == *columns
    };
    if !matches {
        return Err(SyllableError::invalid_input(format!(
            "'{}' has columns {:?}, expected {:?}",
            path.display(),
            found,
            columns
        )));
    }

    reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| SyllableError::csv("parse CSV row", e)))
        .collect()
}

fn write_rows<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<(), SyllableError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SyllableError::io("create CSV output directory", e))?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| SyllableError::csv("create CSV table", e))?;
    // Written by hand so an empty table still carries its header.
    writer
        .write_record(columns)
        .map_err(|e| SyllableError::csv("write CSV header", e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| SyllableError::csv("write CSV row", e))?;
    }
    writer
        .flush()
        .map_err(|e| SyllableError::io("flush CSV table", e))?;
    tracing::info!(path = %path.display(), rows = rows.len(), "csv: table written");
    Ok(())
}
