pub mod config;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;
pub mod text;

pub use config::{ConfigError, CorrectionConfig, CorrectionRule, NormalizerConfig};
pub use io::{HumanReport, MachineReport, SAMPLE_DOCUMENT, read_document, write_final_text};
pub use models::{CorrectionStats, NormalizationOutput, Part, PartKind, SegmentedText, Span};
pub use pipeline::{PipelineResult, process, process_with_config};
pub use stages::{
    collect_last_words, correct_misspellings, count_whitespace, fix_misspellings, last_word,
    normalize_case, sentence_case, synthesize_sentence,
};
pub use text::{DEFAULT_DELIMITERS, split_sentences};
