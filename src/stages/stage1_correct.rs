use tracing::debug;

use crate::config::CorrectionConfig;
use crate::models::CorrectionStats;
use crate::text::word_runs;

/// Result of Stage 1 misspelling correction
#[derive(Debug, Clone)]
pub struct CorrectionResult {
    /// Text with unquoted misspellings replaced
    pub text: String,
    pub stats: CorrectionStats,
}

/// Perform Stage 1: rewrite standalone misspellings
///
/// A word matches a rule when the whole word equals the rule's misspelling,
/// ignoring ASCII case. Matches with a quote character directly before or
/// after them are kept verbatim, original casing included. A quote separated
/// from the word by whitespace does not protect it.
pub fn correct_misspellings(text: &str, config: &CorrectionConfig) -> CorrectionResult {
    let mut output = String::with_capacity(text.len());
    let mut stats = CorrectionStats::default();
    let mut copied = 0;

    for (start, word) in word_runs(text) {
        let Some(rule) = config
            .rules
            .iter()
            .find(|r| r.misspelling.eq_ignore_ascii_case(word))
        else {
            continue;
        };

        let end = start + word.len();
        let quoted_before = text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| config.is_quote(c));
        let quoted_after = text[end..].chars().next().is_some_and(|c| config.is_quote(c));

        if quoted_before || quoted_after {
            debug!("Keeping quoted {:?} at byte {}", word, start);
            stats.protected += 1;
            continue;
        }

        output.push_str(&text[copied..start]);
        output.push_str(&rule.replacement);
        copied = end;
        stats.replaced += 1;
    }

    output.push_str(&text[copied..]);

    CorrectionResult {
        text: output,
        stats,
    }
}

/// Shorthand for [`correct_misspellings`] when only the text is needed
pub fn fix_misspellings(text: &str, config: &CorrectionConfig) -> String {
    correct_misspellings(text, config).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorrectionRule;

    fn fix(text: &str) -> String {
        fix_misspellings(text, &CorrectionConfig::default())
    }

    #[test]
    fn test_replaces_every_casing() {
        assert_eq!(fix("tHis iz your homeWork."), "tHis is your homeWork.");
        assert_eq!(fix("Iz it? IZ! iZ."), "is it? is! is.");
    }

    #[test]
    fn test_keeps_quoted_occurrences() {
        let text = "fix“iZ” with correct “is”";
        let result = correct_misspellings(text, &CorrectionConfig::default());
        assert_eq!(result.text, text);
        assert_eq!(result.stats.replaced, 0);
        assert_eq!(result.stats.protected, 1);

        assert_eq!(fix(r#"a iz"iz" b"#), r#"a iz"iz" b"#);
        assert_eq!(fix(r#""iz b"#), r#""iz b"#);
    }

    #[test]
    fn test_spaced_quotes_do_not_protect() {
        assert_eq!(fix(r#"" iz ""#), r#"" is ""#);
        assert_eq!(fix("“ Iz ”"), "“ is ”");
    }

    #[test]
    fn test_only_standalone_words() {
        assert_eq!(fix("izzard fizz quiz iz_ iz2"), "izzard fizz quiz iz_ iz2");
        assert_eq!(fix("(iz), iz-iz"), "(is), is-is");
    }

    #[test]
    fn test_idempotent() {
        let text = "it iZ misspeLLing here. fix“iZ” with correct “is”, but ONLY when it Iz a mistAKE.";
        let once = fix(text);
        assert_eq!(fix(&once), once);
    }

    #[test]
    fn test_multiple_rules_and_counts() {
        let config = CorrectionConfig {
            rules: vec![CorrectionRule::new("teh", "the"), CorrectionRule::new("iz", "is")],
            ..Default::default()
        };
        let result = correct_misspellings("Teh cat iz on teh “teh” mat", &config);
        assert_eq!(result.text, "the cat is on the “teh” mat");
        assert_eq!(result.stats.replaced, 3);
        assert_eq!(result.stats.protected, 1);
        assert_eq!(result.stats.total_matches(), 4);
    }

    #[test]
    fn test_matching_is_ascii_case_insensitive_only() {
        let result = correct_misspellings("ız İz iz", &CorrectionConfig::default());
        assert_eq!(result.text, "ız İz is");
        assert_eq!(result.stats.replaced, 1);
        assert_eq!(result.stats.protected, 0);
    }

    #[test]
    fn test_validated_rules_stay_idempotent() {
        let config = crate::config::NormalizerConfig {
            correction: CorrectionConfig {
                rules: vec![CorrectionRule::new("teh", "the"), CorrectionRule::new("iz", "is")],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let once = fix_misspellings("teh cat iz “teh” cat", &config.correction);
        assert_eq!(once, "the cat is “teh” cat");
        assert_eq!(fix_misspellings(&once, &config.correction), once);
    }

    #[test]
    fn test_no_rules_is_identity() {
        let config = CorrectionConfig {
            rules: vec![],
            ..Default::default()
        };
        assert_eq!(fix_misspellings("iz iz", &config), "iz iz");
    }
}
