use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::SyllableError;
use crate::types::SyllableRecord;

#[derive(Debug, Clone, Serialize)]
pub struct SyllableReport {
    pub schema_version: u32,
    pub meta: ReportMeta,
    pub syllables: Vec<SyllableRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub generated_at: String,
    pub textgrid_path: String,
    pub frequency_path: String,
    pub syllable_count: usize,
    pub pitched_count: usize,
    pub confidence_quantile: f64,
}

impl SyllableReport {
    pub const SCHEMA_VERSION: u32 = 1;

    pub fn new(
        textgrid_path: &Path,
        frequency_path: &Path,
        confidence_quantile: f64,
        syllables: Vec<SyllableRecord>,
    ) -> Self {
        Self {
            schema_version: Self::SCHEMA_VERSION,
            meta: ReportMeta {
                generated_at: chrono::Utc::now().to_rfc3339(),
                textgrid_path: textgrid_path.to_string_lossy().into_owned(),
                frequency_path: frequency_path.to_string_lossy().into_owned(),
                syllable_count: syllables.len(),
                pitched_count: syllables.iter().filter(|s| s.pitch.is_some()).count(),
                confidence_quantile,
            },
            syllables,
        }
    }
}

pub fn write_report(path: &Path, report: &SyllableReport) -> Result<(), SyllableError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| SyllableError::io("create report output directory", e))?;
    }

    let mut file = File::create(path).map_err(|e| SyllableError::io("create report file", e))?;
    serde_json::to_writer_pretty(&mut file, report)
        .map_err(|e| SyllableError::json("serialize report", e))?;
    file.write_all(b"\n")
        .map_err(|e| SyllableError::io("finalize report file", e))?;
    Ok(())
}
