/// Chromatic names indexed from C; index 9 is A.
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const A4_HZ: f64 = 440.0;
pub const A4_MIDI: i32 = 69;

/// Nearest equal-tempered note name (`"A3"`, `"C#5"`) for a frequency.
///
/// `None` for non-finite or non-positive input.
pub fn freq_to_pitch(freq_hz: f64, reference_hz: f64) -> Option<String> {
    if !freq_hz.is_finite() || freq_hz <= 0.0 || !reference_hz.is_finite() || reference_hz <= 0.0
    {
        return None;
    }
    let semitones = (12.0 * (freq_hz / reference_hz).log2()).round_ties_even();
    if !semitones.is_finite() || semitones.abs() > 1e6 {
        return None;
    }
    let from_c4 = semitones as i64 + 9;
    let note = NOTE_NAMES[from_c4.rem_euclid(12) as usize];
    let octave = 4 + from_c4.div_euclid(12);
    Some(format!("{note}{octave}"))
}

/// MIDI number of a note name, A4 = 69.
///
/// Accepts `#`/`♯` sharps, `b`/`♭` flats (repeated accidentals stack) and signed
/// octaves: `"C#4"`, `"Bb3"`, `"C-1"`. Returns `None` when the name does not parse.
pub fn note_to_midi(name: &str) -> Option<f64> {
    let name = name.trim();
    let mut chars = name.chars();
    let letter = chars.next()?;
    let pitch_class: i32 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = chars.as_str();
    let octave_at = rest
        .char_indices()
        .find(|(_, c)| !matches!(c, '#' | '♯' | 'b' | '♭' | '!'))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    let (accidentals, octave_str) = rest.split_at(octave_at);
    let offset: i32 = accidentals
        .chars()
        .map(|c| match c {
            '#' | '♯' => 1,
            'b' | '♭' | '!' => -1,
            _ => 0,
        })
        .sum();

    if octave_str.is_empty() {
        return None;
    }
    let octave = octave_str.parse::<i32>().ok()?;
    Some(f64::from((octave + 1) * 12 + pitch_class + offset))
}
