use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use wav2karaoke_rs::{
    read_frequency_track, read_interval_tiers, read_syllable_rows, write_records,
    write_syllable_rows, FrequencySample, IntervalTiers, PipelineConfig, SyllableAligner,
    SyllableAlignerBuilder, TimedLabel, WordHyphenator,
};

/// Hyphenation table standing in for the dictionary so expectations stay exact.
struct TableHyphenator(HashMap<&'static str, &'static [&'static str]>);

impl WordHyphenator for TableHyphenator {
    fn hyphenate(&self, word: &str) -> Vec<String> {
        match self.0.get(word) {
            Some(pieces) => pieces.iter().map(|p| p.to_string()).collect(),
            None => vec![word.to_string()],
        }
    }
}

fn table_aligner() -> SyllableAligner {
    let mut table: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    table.insert("happy", &["hap", "py"]);
    table.insert("little", &["lit", "tle"]);
    table.insert("everybody", &["ev", "ery", "body"]);
    SyllableAlignerBuilder::new(PipelineConfig::default())
        .with_hyphenator(Box::new(TableHyphenator(table)))
        .build()
        .expect("build should succeed")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wav2karaoke_rs_it_{name}"))
}

/// Lay phones out back to back from `start`, 100 ms each, and wrap them in a word.
fn push_word(tiers: &mut IntervalTiers, word: &str, phones: &[&str], start: f64) -> f64 {
    let mut t = start;
    for phone in phones {
        tiers.phones.push(TimedLabel::new(*phone, t, t + 0.1));
        t += 0.1;
    }
    tiers.words.push(TimedLabel::new(word, start, t));
    t
}

fn lyric_tiers() -> IntervalTiers {
    let mut tiers = IntervalTiers::default();
    let t = push_word(&mut tiers, "happy", &["HH", "AE1", "P", "IY0"], 0.0);
    let t = push_word(&mut tiers, "little", &["L", "IH1", "T", "AH0", "L"], t);
    let t = push_word(&mut tiers, "about", &["AH0", "B", "AW1", "T"], t);
    let t = push_word(&mut tiers, "everybody", &["EH1", "V", "R", "IY0", "B", "AA2", "D", "IY0"], t);
    push_word(&mut tiers, "happy", &["HH", "AE1", "P", "IY0"], t);
    tiers
}

fn long_format_textgrid(tiers: &IntervalTiers) -> String {
    let xmax = tiers.words.last().map(|w| w.end).unwrap_or(0.0);
    let mut out = format!(
        "File type = \"ooTextFile\"\nObject class = \"TextGrid\"\n\nxmin = 0\nxmax = {xmax}\ntiers? <exists>\nsize = 2\nitem []:\n"
    );
    for (idx, (name, labels)) in [("words", &tiers.words), ("phones", &tiers.phones)]
        .into_iter()
        .enumerate()
    {
        out.push_str(&format!(
            "    item [{}]:\n        class = \"IntervalTier\"\n        name = \"{name}\"\n        xmin = 0\n        xmax = {xmax}\n        intervals: size = {}\n",
            idx + 1,
            labels.len()
        ));
        for (i, label) in labels.iter().enumerate() {
            out.push_str(&format!(
                "        intervals [{}]:\n            xmin = {}\n            xmax = {}\n            text = \"{}\"\n",
                i + 1,
                label.start,
                label.end,
                label.label
            ));
        }
    }
    out
}

#[test]
fn reconciliation_regimes_on_a_lyric_line() {
    let rows = table_aligner().syllabify(&lyric_tiers()).expect("valid tiers");
    let by_word = rows
        .iter()
        .map(|r| (r.word.as_str(), r.syl.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        by_word,
        vec![
            ("happy", "hap"),
            ("happy", "py"),
            ("little", "lit"),
            ("little", "tle"),
            ("about", "a"),
            ("about", "bout"),
            ("everybody", "eve"),
            ("everybody", "ry"),
            ("everybody", "bo"),
            ("everybody", "dy"),
            ("happy", "hap"),
            ("happy", "py"),
        ]
    );
}

#[test]
fn syllable_spans_tile_each_word() {
    let tiers = lyric_tiers();
    let rows = table_aligner().syllabify(&tiers).expect("valid tiers");
    for word in &tiers.words {
        let spans = rows
            .iter()
            .filter(|r| r.start >= word.start - 1e-9 && r.end <= word.end + 1e-9)
            .collect::<Vec<_>>();
        assert!(!spans.is_empty(), "word={}", word.label);
        assert!((spans[0].start - word.start).abs() < 1e-9);
        assert!((spans[spans.len() - 1].end - word.end).abs() < 1e-9);
        for pair in spans.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-9);
        }
    }
}

#[test]
fn files_round_trip_through_both_stages() {
    let tiers = lyric_tiers();
    let grid_path = temp_path("song.TextGrid");
    let f0_path = temp_path("song.f0.csv");
    let syllables_path = temp_path("song.syllables.csv");
    fs::write(&grid_path, long_format_textgrid(&tiers)).expect("write TextGrid");

    // 10 ms frames; a steady A3 over the first word, silence elsewhere.
    let mut f0 = String::from("time,frequency,confidence\n");
    for i in 0..400 {
        let time = i as f64 * 0.01;
        let (frequency, confidence) = if time < 0.4 { (220.0, 0.95) } else { (0.0, 0.01) };
        f0.push_str(&format!("{time},{frequency},{confidence}\n"));
    }
    fs::write(&f0_path, f0).expect("write f0 csv");

    let aligner = table_aligner();
    let loaded = read_interval_tiers(&grid_path, 3).expect("readable TextGrid");
    assert_eq!(loaded.words.len(), tiers.words.len());
    assert_eq!(loaded.phones.len(), tiers.phones.len());

    let rows = aligner.syllabify(&loaded).expect("valid tiers");
    write_syllable_rows(&syllables_path, &rows).expect("write syllables");

    let reread = read_syllable_rows(&syllables_path).expect("read syllables");
    assert_eq!(reread.len(), rows.len());
    let track = read_frequency_track(&f0_path).expect("read f0");
    let records = aligner.attach_melody(reread, &track);
    write_records(&syllables_path, &records).expect("rewrite in place");

    assert_eq!(records.len(), rows.len());
    assert_eq!(records[0].pitch.as_deref(), Some("A3"));
    assert_eq!(records[0].midi, Some(57.0));
    assert_eq!(records[1].pitch.as_deref(), Some("A3"));
    // Low-confidence zero-frequency frames give an f0 of 0 and therefore no pitch.
    assert_eq!(records[2].f0_freq, Some(0.0));
    assert!(records[2].pitch.is_none());
    assert!(records[2].midi.is_none());

    let header = fs::read_to_string(&syllables_path)
        .expect("read output")
        .lines()
        .next()
        .map(str::to_string);
    assert_eq!(
        header.as_deref(),
        Some("word,syllable,start,end,syl,f0_freq,pitch,midi")
    );

    let _ = fs::remove_file(&grid_path);
    let _ = fs::remove_file(&f0_path);
    let _ = fs::remove_file(&syllables_path);
}

#[test]
fn most_confident_frame_sets_the_pitch() {
    let aligner = table_aligner();
    let rows = vec![wav2karaoke_rs::SyllableRow {
        word: "happy".to_string(),
        syllable: "HHAE1".to_string(),
        start: 1.0,
        end: 1.5,
        syl: "hap".to_string(),
    }];
    let track = [
        FrequencySample { time: 1.1, frequency: 220.0, confidence: 0.5 },
        FrequencySample { time: 1.2, frequency: 225.0, confidence: 0.99 },
        FrequencySample { time: 1.3, frequency: 230.0, confidence: 0.3 },
    ];
    let records = aligner.attach_melody(rows, &track);
    assert_eq!(records[0].f0_freq, Some(225.0));
    assert_eq!(records[0].pitch.as_deref(), Some("A3"));
    assert_eq!(records[0].midi, Some(57.0));
}

#[test]
fn default_dictionary_produces_non_empty_text_for_every_syllable() {
    let aligner = SyllableAlignerBuilder::new(PipelineConfig::default())
        .build()
        .expect("embedded dictionary should load");
    let rows = aligner.syllabify(&lyric_tiers()).expect("valid tiers");
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| !r.syl.is_empty()));
    let about = rows
        .iter()
        .filter(|r| r.word == "about")
        .map(|r| r.syl.as_str())
        .collect::<String>();
    assert_eq!(about, "about");
}

#[test]
fn default_dictionary_splits_short_final_syllables() {
    let aligner = SyllableAlignerBuilder::new(PipelineConfig::default())
        .build()
        .expect("embedded dictionary should load");
    let mut tiers = IntervalTiers::default();
    let t = push_word(&mut tiers, "happy", &["HH", "AE1", "P", "IY0"], 0.0);
    push_word(&mut tiers, "army", &["AA1", "R", "M", "IY0"], t);
    let rows = aligner.syllabify(&tiers).expect("valid tiers");
    let syls = rows.iter().map(|r| r.syl.as_str()).collect::<Vec<_>>();
    assert_eq!(syls, vec!["hap", "py", "ar", "my"]);
}
