use serde::Serialize;

/// The three independent results of normalizing one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationOutput {
    /// Corrected, sentence-cased text with the extra sentence appended
    pub final_text: String,
    /// Whitespace characters in the original input
    pub whitespace_count: usize,
    /// Sentence built from the last word of each segment, empty if none
    pub extra_sentence: String,
}

impl NormalizationOutput {
    pub fn into_tuple(self) -> (String, usize, String) {
        (self.final_text, self.whitespace_count, self.extra_sentence)
    }
}

/// Counts gathered while applying misspelling rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CorrectionStats {
    /// Standalone matches that were rewritten
    pub replaced: usize,
    /// Standalone matches left alone because a quote touched them
    pub protected: usize,
}

impl CorrectionStats {
    pub fn total_matches(&self) -> usize {
        self.replaced + self.protected
    }
}
