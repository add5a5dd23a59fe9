use crate::alignment::pitch::{freq_to_pitch, note_to_midi};
use crate::alignment::stats::{median_sorted, quantile_sorted};
use crate::config::MelodyConfig;
use crate::types::{FrequencySample, MelodyEstimate};

/// Samples whose time lies in `[start, end)`.
///
/// `track` must be time-ordered; the window is located by binary search.
pub fn window(track: &[FrequencySample], start: f64, end: f64) -> &[FrequencySample] {
    let lo = track.partition_point(|s| s.time < start);
    let hi = track.partition_point(|s| s.time < end);
    if hi <= lo {
        return &[];
    }
    &track[lo..hi]
}

/// Representative frequency of one syllable window.
///
/// Frames under the configured confidence quantile are dropped and the median
/// frequency of the survivors is returned. The quantile is taken over every frame
/// with a finite confidence; frames with a non-finite frequency only drop out of
/// the median.
pub fn estimate_f0(samples: &[FrequencySample], confidence_quantile: f64) -> Option<f64> {
    let mut confidences = samples
        .iter()
        .map(|s| s.confidence)
        .filter(|c| c.is_finite())
        .collect::<Vec<_>>();
    confidences.sort_by(f64::total_cmp);
    let threshold = quantile_sorted(&confidences, confidence_quantile)?;

    let mut kept = samples
        .iter()
        .filter(|s| s.confidence >= threshold && s.frequency.is_finite())
        .map(|s| s.frequency)
        .collect::<Vec<_>>();
    kept.sort_by(f64::total_cmp);
    median_sorted(&kept)
}

/// Pitch fields for the syllable spanning `[start, end)`.
pub fn aggregate_syllable(
    track: &[FrequencySample],
    start: f64,
    end: f64,
    config: &MelodyConfig,
) -> MelodyEstimate {
    let samples = window(track, start, end);
    if samples.is_empty() {
        tracing::debug!(start, end, "melody: empty window");
        return MelodyEstimate::missing();
    }

    let f0_freq = estimate_f0(samples, config.confidence_quantile);
    let pitch = f0_freq.and_then(|f0| freq_to_pitch(f0, config.reference_hz));
    let midi = pitch.as_deref().and_then(note_to_midi);
    tracing::debug!(
        start,
        end,
        frames = samples.len(),
        f0_freq = ?f0_freq,
        pitch = pitch.as_deref().unwrap_or(""),
        "melody: syllable aggregated"
    );
    MelodyEstimate {
        f0_freq,
        pitch,
        midi,
    }
}

/// True when sample times never decrease.
pub fn is_time_ordered(track: &[FrequencySample]) -> bool {
    track.windows(2).all(|pair| pair[0].time <= pair[1].time)
}
