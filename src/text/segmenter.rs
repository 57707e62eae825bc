use crate::models::{Part, SegmentedText};

/// Sentence-terminating characters used when no others are configured
pub const DEFAULT_DELIMITERS: [char; 4] = ['.', '!', '?', ':'];

/// Split text into alternating segments and delimiters in a single pass
///
/// Each delimiter character opens its own delimiter, which then absorbs all
/// whitespace that follows it. Runs like `...` therefore produce empty
/// segments between the dots. Rejoining the parts yields `text` unchanged.
pub fn split_sentences<'a>(text: &'a str, delimiters: &[char]) -> SegmentedText<'a> {
    let mut parts = Vec::new();
    let mut segment_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !delimiters.contains(&c) {
            continue;
        }

        let mut end = index + c.len_utf8();
        while let Some(&(next_index, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            end = next_index + next.len_utf8();
            chars.next();
        }

        parts.push(Part::segment(segment_start, index));
        parts.push(Part::delimiter(index, end));
        segment_start = end;
    }

    // Trailing segment, empty when the text ends on a delimiter
    parts.push(Part::segment(segment_start, text.len()));

    SegmentedText::new(text, parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> (Vec<&str>, Vec<&str>) {
        let segmented = split_sentences(text, &DEFAULT_DELIMITERS);
        (
            segmented.segments().collect(),
            segmented.delimiters().collect(),
        )
    }

    #[test]
    fn test_split_basic() {
        let (segments, delimiters) = split("Hello world. Bye now.");
        assert_eq!(segments, vec!["Hello world", "Bye now", ""]);
        assert_eq!(delimiters, vec![". ", "."]);
    }

    #[test]
    fn test_delimiter_keeps_line_breaks() {
        let (segments, delimiters) = split("homework:\n  this is it!\n\n\tok?");
        assert_eq!(segments, vec!["homework", "this is it", "ok", ""]);
        assert_eq!(delimiters, vec![":\n  ", "!\n\n\t", "?"]);
    }

    #[test]
    fn test_ellipsis_yields_empty_segments() {
        let (segments, delimiters) = split("Wait... what");
        assert_eq!(segments, vec!["Wait", "", "", "what"]);
        assert_eq!(delimiters, vec![".", ".", ". "]);
    }

    #[test]
    fn test_empty_input() {
        let segmented = split_sentences("", &DEFAULT_DELIMITERS);
        assert_eq!(segmented.parts().len(), 1);
        assert_eq!(segmented.segments().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_rejoin_is_lossless() {
        let inputs = [
            "",
            "no delimiter at all",
            "a.b!c?d:e",
            "  lead. \u{a0}nbsp\u{2003}. trail  ",
            "fix“iZ” with correct “is”, but ONLY when it Iz a mistAKE.\n\n\n",
        ];
        for input in inputs {
            let segmented = split_sentences(input, &DEFAULT_DELIMITERS);
            assert_eq!(segmented.rejoin(), input);
            assert_eq!(
                segmented.segment_count(),
                segmented.delimiters().count() + 1
            );
        }
    }

    #[test]
    fn test_custom_delimiters() {
        let segmented = split_sentences("one; two. three", &[';']);
        assert_eq!(
            segmented.segments().collect::<Vec<_>>(),
            vec!["one", "two. three"]
        );
    }
}
