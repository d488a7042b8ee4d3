/// Normalize a transcript or reference sentence for bigram comparison.
///
/// Lower-cases the input, keeps only ASCII `a`–`z`, `0`–`9` and the ASCII
/// space, then trims surrounding whitespace. Accented letters, CJK text and
/// punctuation are removed entirely, so non-English sentences collapse to
/// little more than their spaces and digits. Inner runs of spaces are kept
/// as-is; only tabs and newlines are dropped with the rest.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|&ch| is_kept(ch))
        .collect();
    kept.trim().to_string()
}

fn is_kept(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == ' '
}
