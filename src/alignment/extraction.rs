use crate::error::SyllableError;
use crate::types::{IntervalTiers, TimedLabel, WordOccurrence, WordPhones};

/// Attach to every word interval the phones its span contains.
///
/// Occurrence numbers follow the order of the `words` tier. Unordered tiers
/// cannot be extracted meaningfully and abort the whole run.
pub fn extract_word_phones(tiers: &IntervalTiers) -> Result<Vec<WordPhones>, SyllableError> {
    ensure_time_ordered("phones", &tiers.phones)?;
    ensure_time_ordered("words", &tiers.words)?;

    let mut out = Vec::with_capacity(tiers.words.len());
    // Both tiers are sorted, so phones before the current word can be skipped for good.
    let mut first_candidate = 0usize;
    for (idx, word) in tiers.words.iter().enumerate() {
        while first_candidate < tiers.phones.len()
            && tiers.phones[first_candidate].start < word.start
        {
            first_candidate += 1;
        }
        let phones = tiers.phones[first_candidate..]
            .iter()
            .take_while(|phone| phone.start <= word.end)
            .filter(|phone| phone.is_within(word))
            .cloned()
            .collect::<Vec<_>>();

        tracing::debug!(
            occurrence = idx,
            word = word.label.as_str(),
            phone_count = phones.len(),
            "extraction: word phones"
        );
        out.push(WordPhones {
            occurrence: WordOccurrence(idx),
            word: word.clone(),
            phones,
        });
    }
    Ok(out)
}

fn ensure_time_ordered(tier: &str, intervals: &[TimedLabel]) -> Result<(), SyllableError> {
    for (idx, interval) in intervals.iter().enumerate() {
        if !interval.start.is_finite() || !interval.end.is_finite() || interval.end < interval.start
        {
            return Err(SyllableError::invalid_input(format!(
                "{tier} tier interval {idx} ('{}') has invalid span [{}, {}]",
                interval.label, interval.start, interval.end
            )));
        }
    }
    for (idx, pair) in intervals.windows(2).enumerate() {
        if pair[1].start < pair[0].start {
            return Err(SyllableError::invalid_input(format!(
                "{tier} tier is not time-ordered at interval {}: {} starts before {}",
                idx + 1,
                pair[1].start,
                pair[0].start
            )));
        }
    }
    Ok(())
}
