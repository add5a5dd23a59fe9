use crate::types::{PhoneInterval, Syllable, WordPhones};

/// ARPAbet-style vowel test: nuclei carry a trailing stress digit (`AE1`, `IY0`).
pub fn is_stress_marked_vowel(label: &str) -> bool {
    label.chars().last().is_some_and(|c| c.is_ascii_digit())
}

/// Split one word's phones into syllables.
///
/// Single pass with a read cursor. On a nucleus:
/// - no later nucleus: the rest of the word becomes this syllable's coda;
/// - two or more consonants before the next nucleus: the first one closes
///   this syllable and the cursor skips it;
/// - otherwise the following consonant (if any) is left as the next onset.
///
/// A word without any nucleus yields no syllables.
pub fn syllabify_word<F>(word: &WordPhones, is_vowel: F) -> Vec<Syllable>
where
    F: Fn(&str) -> bool,
{
    let phones = &word.phones;
    let mut groups: Vec<Vec<&PhoneInterval>> = Vec::new();
    let mut current: Vec<&PhoneInterval> = Vec::new();
    let mut cursor = 0usize;

    while cursor < phones.len() {
        let phone = &phones[cursor];
        current.push(phone);
        cursor += 1;
        if !is_vowel(&phone.label) {
            continue;
        }

        let rem = &phones[cursor..];
        match rem.iter().position(|p| is_vowel(&p.label)) {
            None => {
                current.extend(rem.iter());
                groups.push(std::mem::take(&mut current));
                break;
            }
            Some(next_vowel) if next_vowel > 1 => {
                current.push(&rem[0]);
                cursor += 1;
            }
            Some(_) => {}
        }
        groups.push(std::mem::take(&mut current));
    }

    if groups.is_empty() {
        tracing::debug!(
            occurrence = word.occurrence.0,
            word = word.word.label.as_str(),
            phone_count = phones.len(),
            "syllabify: no vowel nucleus, word skipped"
        );
        return Vec::new();
    }

    let syl_count = groups.len();
    groups
        .into_iter()
        .enumerate()
        .filter_map(|(syl_index, group)| {
            let first = group.first()?;
            let last = group.last()?;
            let text = group.iter().map(|p| p.label.as_str()).collect::<String>();
            tracing::debug!(
                word = word.word.label.as_str(),
                syl_index,
                syl_count,
                text = text.as_str(),
                start = first.start,
                end = last.end,
                "syllabify: syllable"
            );
            Some(Syllable {
                word: word.word.label.clone(),
                text,
                start: first.start,
                end: last.end,
                occurrence: word.occurrence,
                syl_count,
                syl_index,
            })
        })
        .collect()
}
