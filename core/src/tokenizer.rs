use lazy_static::lazy_static;
use regex::Regex;

/// Words shorter than this are never indexed.
pub const MIN_WORD_LEN: usize = 3;

lazy_static! {
    // A markup tag (possibly unterminated at end of input) or a run of ASCII letters.
    static ref RE: Regex = Regex::new(r"<[^>]*>?|[A-Za-z]+").expect("valid regex");
}

pub fn normalize_word(word: &str) -> String { word.to_ascii_lowercase() }

/// Scan html for words: maximal runs of ASCII letters outside `<...>` markup,
/// with the byte offset where each starts.
pub fn scan_words(html: &str) -> impl Iterator<Item = (&str, usize)> + '_ {
    RE.find_iter(html)
        .filter(|m| !m.as_str().starts_with('<'))
        .map(|m| (m.as_str(), m.start()))
}

/// Tokenize html into (normalized word, byte offset), dropping words shorter than `MIN_WORD_LEN`.
pub fn tokenize(html: &str) -> Vec<(String, usize)> {
    scan_words(html)
        .filter(|(word, _)| word.len() >= MIN_WORD_LEN)
        .map(|(word, pos)| (normalize_word(word), pos))
        .collect()
}
