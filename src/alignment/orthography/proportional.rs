/// Placeholder for a sung syllable that gets no letters of its own.
pub const MELISMA_EXTENDER: &str = "_";

/// Split the letters of `word` into `count` contiguous fragments of near-equal length.
///
/// A leading `a`/`A` becomes the fragment `"a"` ("About" -> "a", "bout") and the
/// remaining letters are shared by the other `count - 1` fragments. Longer fragments
/// come first. Works on chars, not bytes.
pub(crate) fn split_letters(word: &str, count: usize) -> Vec<String> {
    let chars = word.chars().collect::<Vec<_>>();
    match chars.split_first() {
        Some((first, rest)) if count > 1 && first.eq_ignore_ascii_case(&'a') => {
            let mut pieces = Vec::with_capacity(count);
            pieces.push("a".to_string());
            pieces.extend(even_split(rest, count - 1));
            pieces
        }
        _ => even_split(&chars, count),
    }
}

fn even_split(chars: &[char], count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    let base = chars.len() / count;
    let extra = chars.len() % count;

    let mut pieces = Vec::with_capacity(count);
    let mut pos = 0usize;
    for i in 0..count {
        let take = base + usize::from(i < extra);
        let piece = chars[pos..pos + take].iter().collect::<String>();
        pos += take;
        if piece.is_empty() {
            pieces.push(MELISMA_EXTENDER.to_string());
        } else {
            pieces.push(piece);
        }
    }
    pieces
}
