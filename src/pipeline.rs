use tracing::info;

use crate::config::NormalizerConfig;
use crate::models::{CorrectionStats, NormalizationOutput};
use crate::stages::{correct_misspellings, count_whitespace, normalize_segments, synthesize};
use crate::text::split_sentences;

/// Output of a full pipeline run plus what each stage observed
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub output: NormalizationOutput,
    pub corrections: CorrectionStats,
    /// Segments found in the corrected text, empty ones included
    pub segment_count: usize,
    pub last_words: Vec<String>,
}

/// Normalize a document with the default configuration
pub fn process(text: &str) -> NormalizationOutput {
    process_with_config(text, &NormalizerConfig::default()).output
}

/// Run every stage over a document
///
/// 1. Count whitespace in the original input
/// 2. Fix unquoted misspellings
/// 3. Split into sentences and sentence-case each one
/// 4. Build the extra sentence from each segment's last word and append it
///    as a new paragraph
///
/// Never fails. The config is expected to have passed
/// [`NormalizerConfig::validate`].
pub fn process_with_config(text: &str, config: &NormalizerConfig) -> PipelineResult {
    info!("Normalizing document of {} bytes", text.len());

    let whitespace_count = count_whitespace(text);

    let correction = correct_misspellings(text, &config.correction);
    info!(
        "Corrections: {} replaced, {} kept inside quotes",
        correction.stats.replaced, correction.stats.protected
    );

    let segmented = split_sentences(&correction.text, &config.delimiters);
    let segment_count = segmented.segment_count();
    let cased = normalize_segments(&segmented);

    let synthesis = synthesize(cased.segments.iter().map(String::as_str));

    let final_text = if synthesis.sentence.is_empty() {
        cased.text
    } else {
        let mut final_text = cased.text;
        final_text.push_str(&config.paragraph_separator);
        final_text.push_str(&synthesis.sentence);
        final_text
    };

    info!(
        "Whitespace: {}, segments: {}, last words: {}",
        whitespace_count,
        segment_count,
        synthesis.last_words.len()
    );

    PipelineResult {
        output: NormalizationOutput {
            final_text,
            whitespace_count,
            extra_sentence: synthesis.sentence,
        },
        corrections: correction.stats,
        segment_count,
        last_words: synthesis.last_words,
    }
}
