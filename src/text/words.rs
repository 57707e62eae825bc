/// Word characters: Unicode alphanumerics and underscore
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterator over maximal runs of word characters with their byte offsets
///
/// Each run is bounded by word boundaries on both sides, so a run equal to a
/// word is a standalone occurrence of it.
#[derive(Debug, Clone)]
pub struct WordRuns<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for WordRuns<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos + self.text[self.pos..].find(is_word_char)?;
        let tail = &self.text[start..];
        let len = tail
            .find(|c: char| !is_word_char(c))
            .unwrap_or(tail.len());
        self.pos = start + len;
        Some((start, &tail[..len]))
    }
}

pub fn word_runs(text: &str) -> WordRuns<'_> {
    WordRuns { text, pos: 0 }
}

/// Words made only of letters, bounded by word boundaries on both sides
///
/// A run like `abc123` is skipped entirely rather than trimmed to `abc`.
pub fn alphabetic_words(text: &str) -> impl Iterator<Item = &str> {
    word_runs(text)
        .map(|(_, word)| word)
        .filter(|word| word.chars().all(char::is_alphabetic))
}
