/// Count every Unicode whitespace code point in the text
///
/// Covers spaces, tabs, line breaks, no-break spaces and the other
/// `White_Space` characters, not only ASCII spaces.
pub fn count_whitespace(text: &str) -> usize {
    text.chars().filter(|c| c.is_whitespace()).count()
}
