use crate::error::SyllableError;

mod proportional;

pub use proportional::MELISMA_EXTENDER;

/// How the hyphenation piece count compared with the sung syllable count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// One sung syllable: the whole spelling, no hyphenation.
    Single,
    /// As many pieces as syllables: 1:1 by position.
    Exact,
    /// More pieces than syllables: the surplus tail folds into the last syllable.
    Elision,
    /// More syllables than pieces: the letters are split proportionally.
    ExcessPhonemes,
}

impl Regime {
    pub fn classify(syl_count: usize, piece_count: usize) -> Self {
        if syl_count == 1 {
            Self::Single
        } else if syl_count == piece_count {
            Self::Exact
        } else if syl_count < piece_count {
            Self::Elision
        } else {
            Self::ExcessPhonemes
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Exact => "exact",
            Self::Elision => "elision",
            Self::ExcessPhonemes => "excess_phonemes",
        }
    }
}

/// Orthographic text for every syllable of one word occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct WordOrthography {
    pub regime: Regime,
    /// Exactly `syl_count` entries, each non-empty.
    pub pieces: Vec<String>,
}

/// Assign orthographic text to each of the `syl_count` sung syllables of `word`.
///
/// `hyphenate` is only consulted when more than one syllable was sung.
pub fn reconcile_word<H>(
    word: &str,
    syl_count: usize,
    hyphenate: H,
) -> Result<WordOrthography, SyllableError>
where
    H: FnOnce(&str) -> Vec<String>,
{
    if word.is_empty() {
        return Err(SyllableError::malformed_word(word, "empty spelling"));
    }
    if syl_count == 0 {
        return Err(SyllableError::malformed_word(word, "syllable count must be >= 1"));
    }
    if syl_count == 1 {
        return Ok(WordOrthography {
            regime: Regime::Single,
            pieces: vec![word.to_string()],
        });
    }

    let hyphenated = hyphenate(word);
    let regime = Regime::classify(syl_count, hyphenated.len());
    let pieces = match regime {
        Regime::Single | Regime::Exact => hyphenated,
        Regime::Elision => fold_tail(hyphenated, syl_count),
        Regime::ExcessPhonemes => proportional::split_letters(word, syl_count),
    };

    tracing::debug!(
        word,
        syl_count,
        regime = regime.as_str(),
        pieces = ?pieces,
        "orthography: reconciled"
    );
    Ok(WordOrthography { regime, pieces })
}

/// Orthographic text of syllable `syl_index` of `word`.
pub fn reconcile_syllable<H>(
    word: &str,
    syl_count: usize,
    syl_index: usize,
    hyphenate: H,
) -> Result<String, SyllableError>
where
    H: FnOnce(&str) -> Vec<String>,
{
    if syl_index >= syl_count {
        return Err(SyllableError::malformed_word(
            word,
            format!("syllable index {syl_index} out of range for count {syl_count}"),
        ));
    }
    let mut orthography = reconcile_word(word, syl_count, hyphenate)?;
    Ok(orthography.pieces.swap_remove(syl_index))
}

/// Keep the first `count` pieces and append every later piece to the last kept one.
fn fold_tail(pieces: Vec<String>, count: usize) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(count);
    for (i, piece) in pieces.into_iter().enumerate() {
        match merged.last_mut() {
            Some(last) if i >= count => last.push_str(&piece),
            _ => merged.push(piece),
        }
    }
    merged
}
