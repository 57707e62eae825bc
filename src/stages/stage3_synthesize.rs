use tracing::debug;

use crate::text::alphabetic_words;

/// Result of Stage 3 synthesis
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// Last word of each segment that has one, in segment order
    pub last_words: Vec<String>,
    /// The extra sentence, empty when no words were found
    pub sentence: String,
}

/// Last alphabetic word of a segment, if any
pub fn last_word(segment: &str) -> Option<&str> {
    alphabetic_words(segment).last()
}

/// Collect the last word of every segment, skipping segments without words
pub fn collect_last_words<'a, I>(segments: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    segments
        .into_iter()
        .filter_map(last_word)
        .map(str::to_string)
        .collect()
}

/// Join words with single spaces, end with a period, capitalize the start
pub fn synthesize_sentence(words: &[String]) -> String {
    if words.is_empty() {
        return String::new();
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    let mut sentence = String::with_capacity(joined.len() + 1);
    if let Some(first) = chars.next() {
        sentence.extend(first.to_uppercase());
    }
    sentence.push_str(chars.as_str());
    sentence.push('.');
    sentence
}

/// Perform Stage 3: build the extra sentence from cased segments
pub fn synthesize<'a, I>(segments: I) -> SynthesisResult
where
    I: IntoIterator<Item = &'a str>,
{
    let last_words = collect_last_words(segments);
    let sentence = synthesize_sentence(&last_words);
    debug!("Collected last words {:?}", last_words);

    SynthesisResult {
        last_words,
        sentence,
    }
}
