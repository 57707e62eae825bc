use tracing::debug;

use crate::models::{PartKind, SegmentedText};
use crate::text::split_sentences;

/// Result of Stage 2 sentence-case normalization
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// Cased segments rejoined with their original delimiters
    pub text: String,
    /// Each cased segment in order, empty ones included
    pub segments: Vec<String>,
}

/// Lowercase a segment, then uppercase its first letter in place
///
/// Leading spaces, line breaks and punctuation are left where they are.
/// A segment without letters comes back lowercased.
pub fn sentence_case(segment: &str) -> String {
    let lower = segment.to_lowercase();

    let Some((index, first)) = lower.char_indices().find(|(_, c)| c.is_alphabetic()) else {
        return lower;
    };

    let mut cased = String::with_capacity(lower.len());
    cased.push_str(&lower[..index]);
    cased.extend(first.to_uppercase());
    cased.push_str(&lower[index + first.len_utf8()..]);
    cased
}

/// Perform Stage 2 on already segmented text
///
/// Delimiters pass through untouched, so spacing and line breaks survive.
pub fn normalize_segments(segmented: &SegmentedText<'_>) -> CaseResult {
    let mut text = String::with_capacity(segmented.source().len());
    let mut segments = Vec::with_capacity(segmented.segment_count());

    for part in segmented.parts() {
        let raw = segmented.text(part);
        match part.kind {
            PartKind::Segment => {
                let cased = sentence_case(raw);
                text.push_str(&cased);
                segments.push(cased);
            }
            PartKind::Delimiter => text.push_str(raw),
        }
    }

    debug!("Sentence-cased {} segments", segments.len());

    CaseResult { text, segments }
}

/// Split `text` on `delimiters` and sentence-case every segment
pub fn normalize_case(text: &str, delimiters: &[char]) -> CaseResult {
    normalize_segments(&split_sentences(text, delimiters))
}
