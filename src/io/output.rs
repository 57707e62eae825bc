use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::CorrectionStats;
use crate::pipeline::PipelineResult;

/// Machine-readable report of one normalization run
#[derive(Debug, Clone, Serialize)]
pub struct MachineReport {
    pub final_text: String,
    pub whitespace_count: usize,
    pub extra_sentence: String,
    pub last_words: Vec<String>,
    pub corrections: CorrectionStats,
    pub segment_count: usize,
    /// RFC 3339 UTC timestamp
    pub processed_at: String,
}

impl MachineReport {
    pub fn from_result(result: &PipelineResult) -> Self {
        Self {
            final_text: result.output.final_text.clone(),
            whitespace_count: result.output.whitespace_count,
            extra_sentence: result.output.extra_sentence.clone(),
            last_words: result.last_words.clone(),
            corrections: result.corrections,
            segment_count: result.segment_count,
            processed_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable report
pub struct HumanReport<'a> {
    result: &'a PipelineResult,
}

impl<'a> HumanReport<'a> {
    pub fn new(result: &'a PipelineResult) -> Self {
        Self { result }
    }

    /// Whitespace count header followed by the final text
    pub fn format(&self) -> String {
        format!(
            "Original whitespace count: {}\n\n=== Final normalized text ===\n{}\n",
            self.result.output.whitespace_count, self.result.output.final_text
        )
    }

    /// Stage diagnostics, one per line
    pub fn format_details(&self) -> String {
        let corrections = &self.result.corrections;
        let mut output = String::new();
        output.push_str(&format!("Segments: {}\n", self.result.segment_count));
        output.push_str(&format!(
            "Corrections: {} replaced, {} kept inside quotes\n",
            corrections.replaced, corrections.protected
        ));
        output.push_str(&format!("Last words: {}\n", self.result.last_words.join(", ")));
        output.push_str(&format!(
            "Extra sentence: {}\n",
            display_or_none(&self.result.output.extra_sentence)
        ));
        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

/// Write only the final text, with no header
pub fn write_final_text(result: &PipelineResult, path: &Path) -> Result<()> {
    std::fs::write(path, &result.output.final_text)
        .with_context(|| format!("Failed to write file: {:?}", path))
}

fn display_or_none(text: &str) -> &str {
    if text.is_empty() { "(none)" } else { text }
}
