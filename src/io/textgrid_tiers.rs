use std::fs;
use std::path::Path;

use textgrid::{Interval, TextGrid, Tier, TierType};

use crate::error::SyllableError;
use crate::types::{IntervalTiers, SyllableRecord, TimedLabel};

pub const PHONES_TIER: &str = "phones";
pub const WORDS_TIER: &str = "words";
pub const SYLLABLES_TIER: &str = "syllables";

/// Read the `phones` and `words` IntervalTiers of a TextGrid.
///
/// Interval labels are kept as-is (silences included) and times are rounded to
/// `time_decimals`. Files the `textgrid` crate rejects are retried with a plain
/// long-format line parser.
pub fn read_interval_tiers(path: &Path, time_decimals: u32) -> Result<IntervalTiers, SyllableError> {
    let (phones, words) = match read_with_textgrid_crate(path) {
        Ok(tiers) => tiers,
        Err(crate_err) => {
            tracing::debug!(
                path = %path.display(),
                error = %crate_err,
                "textgrid crate parse failed, using fallback parser"
            );
            let contents =
                fs::read_to_string(path).map_err(|e| SyllableError::io("read TextGrid", e))?;
            let phones = parse_tier_fallback(&contents, PHONES_TIER);
            let words = parse_tier_fallback(&contents, WORDS_TIER);
            match (phones, words) {
                (Ok(phones), Ok(words)) => (phones, words),
                (Err(fallback_err), _) | (_, Err(fallback_err)) => {
                    return Err(SyllableError::textgrid(
                        "parse TextGrid",
                        format!(
                            "'{}': textgrid crate ({crate_err}) and fallback parser ({fallback_err}) both failed",
                            path.display()
                        ),
                    ));
                }
            }
        }
    };

    let round = |labels: Vec<TimedLabel>| {
        labels
            .into_iter()
            .map(|l| TimedLabel {
                start: round_to(l.start, time_decimals),
                end: round_to(l.end, time_decimals),
                label: l.label,
            })
            .collect::<Vec<_>>()
    };
    let tiers = IntervalTiers {
        phones: round(phones),
        words: round(words),
    };
    tracing::info!(
        path = %path.display(),
        phones = tiers.phones.len(),
        words = tiers.words.len(),
        "textgrid: tiers loaded"
    );
    Ok(tiers)
}

fn read_with_textgrid_crate(path: &Path) -> Result<(Vec<TimedLabel>, Vec<TimedLabel>), String> {
    let textgrid =
        TextGrid::from_file(path).map_err(|err| format!("textgrid crate parse failed: {err}"))?;
    let phones = interval_tier(&textgrid, PHONES_TIER)?;
    let words = interval_tier(&textgrid, WORDS_TIER)?;
    Ok((phones, words))
}

fn interval_tier(textgrid: &TextGrid, name: &str) -> Result<Vec<TimedLabel>, String> {
    let tier = textgrid
        .tiers
        .iter()
        .find(|tier| tier.tier_type == TierType::IntervalTier && tier.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| format!("missing IntervalTier named '{name}'"))?;
    Ok(tier
        .intervals
        .iter()
        .map(|interval| TimedLabel::new(interval.text.trim(), interval.xmin, interval.xmax))
        .collect())
}

fn parse_tier_fallback(contents: &str, tier_name: &str) -> Result<Vec<TimedLabel>, String> {
    let quoted_name = format!("\"{tier_name}\"");
    let mut in_item = false;
    let mut item_is_interval_tier = false;
    let mut item_has_name = false;
    let mut in_tier = false;
    let mut found_tier = false;

    let mut cur_xmin: Option<f64> = None;
    let mut cur_xmax: Option<f64> = None;
    let mut labels = Vec::new();

    for raw_line in contents.lines() {
        let line = raw_line.trim();
        if line.starts_with("item [") {
            if in_tier {
                break;
            }
            in_item = true;
            item_is_interval_tier = false;
            item_has_name = false;
            cur_xmin = None;
            cur_xmax = None;
            continue;
        }

        if !in_item {
            continue;
        }

        if let Some(value) = parse_assignment_value(line, "class") {
            item_is_interval_tier = value.eq_ignore_ascii_case("\"IntervalTier\"");
            in_tier = item_is_interval_tier && item_has_name;
            continue;
        }

        if let Some(value) = parse_assignment_value(line, "name") {
            item_has_name = value.eq_ignore_ascii_case(&quoted_name);
            in_tier = item_is_interval_tier && item_has_name;
            found_tier |= in_tier;
            continue;
        }

        if !in_tier {
            continue;
        }

        if line.starts_with("intervals [") {
            cur_xmin = None;
            cur_xmax = None;
            continue;
        }

        if let Some(value) = parse_assignment_value(line, "xmin") {
            cur_xmin = Some(parse_number(value, "xmin")?);
            continue;
        }

        if let Some(value) = parse_assignment_value(line, "xmax") {
            cur_xmax = Some(parse_number(value, "xmax")?);
            continue;
        }

        if let Some(value) = parse_assignment_value(line, "text") {
            let xmin = cur_xmin.ok_or_else(|| format!("missing xmin before text in tier '{tier_name}'"))?;
            let xmax = cur_xmax.ok_or_else(|| format!("missing xmax before text in tier '{tier_name}'"))?;
            labels.push(TimedLabel::new(strip_quotes(value).trim(), xmin, xmax));
            cur_xmin = None;
            cur_xmax = None;
        }
    }

    if !found_tier {
        return Err(format!("missing IntervalTier named '{tier_name}'"));
    }
    Ok(labels)
}

fn parse_assignment_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let (lhs, rhs) = line.split_once('=')?;
    if lhs.trim() == key {
        Some(rhs.trim())
    } else {
        None
    }
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

fn parse_number(value: &str, field: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse {field}='{value}': {err}"))
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}

/// Write the alignment tiers plus a `syllables` tier labelled with the reconciled
/// orthographic text, for inspection in Praat.
pub fn write_syllable_textgrid(
    path: &Path,
    tiers: &IntervalTiers,
    records: &[SyllableRecord],
) -> Result<(), SyllableError> {
    let xmax = tiers
        .phones
        .iter()
        .chain(tiers.words.iter())
        .map(|l| l.end)
        .chain(records.iter().map(|r| r.end))
        .fold(0.0f64, f64::max)
        .max(0.001);

    let mut textgrid =
        TextGrid::new(0.0, xmax).map_err(|err| SyllableError::textgrid("build TextGrid", err))?;

    let mut syllable_intervals = Vec::with_capacity(records.len());
    let mut last_end = 0.0f64;
    for record in records {
        let start = record.start.max(last_end);
        let end = record.end.min(xmax);
        if end <= start {
            continue;
        }
        syllable_intervals.push(Interval {
            xmin: start,
            xmax: end,
            text: match record.pitch.as_deref() {
                Some(pitch) => format!("{} ({pitch})", record.syl),
                None => record.syl.clone(),
            },
        });
        last_end = end;
    }

    for (name, intervals) in [
        (WORDS_TIER, to_intervals(&tiers.words)),
        (PHONES_TIER, to_intervals(&tiers.phones)),
        (SYLLABLES_TIER, syllable_intervals),
    ] {
        let tier = Tier {
            name: name.to_string(),
            tier_type: TierType::IntervalTier,
            xmin: 0.0,
            xmax,
            intervals,
            points: Vec::new(),
        };
        textgrid
            .add_tier(tier)
            .map_err(|err| SyllableError::textgrid("add TextGrid tier", err))?;
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| SyllableError::io("create TextGrid output directory", e))?;
    }
    textgrid
        .to_file(path, false)
        .map_err(|err| SyllableError::textgrid("write TextGrid", err))?;
    Ok(())
}

fn to_intervals(labels: &[TimedLabel]) -> Vec<Interval> {
    labels
        .iter()
        .filter(|l| l.end > l.start)
        .map(|l| Interval {
            xmin: l.start,
            xmax: l.end,
            text: l.label.clone(),
        })
        .collect()
}
