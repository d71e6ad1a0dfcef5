//! Enhancement orchestrator.
//!
//! Runs the fixed transformation pipeline: clean, re-classify, scaffold,
//! append the format directive, prefix the mode lead-in. The pipeline is a
//! pure function of its inputs; the report wrapper adds timing metadata for
//! the service layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::cleaner;
use super::intent::{Intent, IntentClassifier, Mode};
use super::scaffold::{self, OutputFormat};

/// Caller's mode selection: a concrete mode, or "recommended" which is
/// resolved by the classifier before transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChoice {
    Recommended,
    Explicit(Mode),
}

impl ModeChoice {
    /// Parse a wire label. Unknown labels default to `Balanced`: mode is
    /// presentation scaffolding, so bad input degrades instead of erroring.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "strict" => ModeChoice::Explicit(Mode::Strict),
            "balanced" => ModeChoice::Explicit(Mode::Balanced),
            "creative" => ModeChoice::Explicit(Mode::Creative),
            "recommended" | "auto" => ModeChoice::Recommended,
            _ => ModeChoice::Explicit(Mode::Balanced),
        }
    }
}

/// Canonical lead-in sentence for each mode. Applied last, so every
/// enhanced prompt begins with exactly one of these.
fn mode_prefix(mode: Mode) -> &'static str {
    match mode {
        Mode::Strict => "Be precise and factual: ",
        Mode::Balanced => "Focus on accuracy: ",
        Mode::Creative => "Be creative but concise: ",
    }
}

/// Complete result of one enhancement run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancementReport {
    /// Original prompt as received
    pub original: String,
    /// Fully scaffolded prompt
    pub optimized: String,
    /// Content intent detected on the cleaned text
    pub intent: Intent,
    /// Mode actually applied (after resolving "recommended")
    pub mode_used: Mode,
    /// Output format the directive targeted
    pub format: OutputFormat,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of the run
    pub timestamp: DateTime<Utc>,
}

/// Main prompt enhancer orchestrating the transformation pipeline
pub struct PromptEnhancer {
    classifier: IntentClassifier,
}

impl Default for PromptEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptEnhancer {
    /// Create a new enhancer with the default pattern set
    pub fn new() -> Self {
        Self {
            classifier: IntentClassifier::new(),
        }
    }

    /// Resolve a mode choice against the raw prompt text.
    pub fn resolve_mode(&self, text: &str, choice: ModeChoice) -> Mode {
        match choice {
            ModeChoice::Explicit(mode) => mode,
            ModeChoice::Recommended => self.classifier.recommend_mode(text),
        }
    }

    /// Run the transformation pipeline with a concrete mode.
    ///
    /// Pure and deterministic: identical arguments always produce
    /// byte-identical output.
    pub fn enhance(
        &self,
        text: &str,
        mode: Mode,
        format: OutputFormat,
        role: Option<&str>,
    ) -> String {
        self.pipeline(text, mode, format, role).0
    }

    fn pipeline(
        &self,
        text: &str,
        mode: Mode,
        format: OutputFormat,
        role: Option<&str>,
    ) -> (String, Intent) {
        let cleaned = cleaner::clean(text);
        let intent = self.classifier.classify(&cleaned);

        let scaffolded = match role.map(str::trim).filter(|r| !r.is_empty()) {
            Some(role) => {
                scaffold::scaffold_with_role(intent, &scaffold::resolve_role(role), &cleaned)
            }
            None => scaffold::scaffold(intent, &cleaned),
        };

        let body = match scaffold::format_directive(format, &cleaned) {
            Some(directive) => format!("{scaffolded} {directive}"),
            None => scaffolded,
        };

        (format!("{}{}", mode_prefix(mode), body), intent)
    }

    /// Resolve the mode, run the pipeline, and wrap the result in a report.
    pub fn run(
        &self,
        text: &str,
        choice: ModeChoice,
        format: OutputFormat,
        role: Option<&str>,
    ) -> EnhancementReport {
        let start = Instant::now();

        let mode_used = self.resolve_mode(text, choice);
        let (optimized, intent) = self.pipeline(text, mode_used, format, role);

        debug!(
            mode = %mode_used,
            format = %format,
            "prompt enhanced ({} -> {} chars)",
            text.len(),
            optimized.len()
        );

        EnhancementReport {
            original: text.to_string(),
            optimized,
            intent,
            mode_used,
            format,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_choice_parsing() {
        assert_eq!(ModeChoice::parse("strict"), ModeChoice::Explicit(Mode::Strict));
        assert_eq!(
            ModeChoice::parse("Creative"),
            ModeChoice::Explicit(Mode::Creative)
        );
        assert_eq!(ModeChoice::parse("recommended"), ModeChoice::Recommended);
        // Unknown and empty labels degrade to balanced
        assert_eq!(
            ModeChoice::parse("turbo"),
            ModeChoice::Explicit(Mode::Balanced)
        );
        assert_eq!(ModeChoice::parse(""), ModeChoice::Explicit(Mode::Balanced));
    }

    #[test]
    fn test_every_mode_has_its_prefix() {
        let enhancer = PromptEnhancer::new();

        let cases = [
            (Mode::Strict, "Be precise and factual: "),
            (Mode::Balanced, "Focus on accuracy: "),
            (Mode::Creative, "Be creative but concise: "),
        ];
        for (mode, prefix) in cases {
            let out = enhancer.enhance("summarize this report", mode, OutputFormat::Plain, None);
            assert!(
                out.starts_with(prefix),
                "mode {:?} output did not start with '{}': {}",
                mode,
                prefix,
                out
            );
        }
    }

    #[test]
    fn test_enhance_is_deterministic() {
        let enhancer = PromptEnhancer::new();

        let a = enhancer.enhance(
            "please write a story about rust",
            Mode::Creative,
            OutputFormat::Markdown,
            Some("creative-writer"),
        );
        let b = enhancer.enhance(
            "please write a story about rust",
            Mode::Creative,
            OutputFormat::Markdown,
            Some("creative-writer"),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_blank_role_uses_plain_scaffold() {
        let enhancer = PromptEnhancer::new();

        let out = enhancer.enhance("sort a list", Mode::Balanced, OutputFormat::Plain, Some("  "));
        assert!(!out.contains("ROLE:"));
    }

    #[test]
    fn test_report_carries_resolved_mode() {
        let enhancer = PromptEnhancer::new();

        let report = enhancer.run(
            "debug this function",
            ModeChoice::Recommended,
            OutputFormat::Plain,
            None,
        );
        assert_eq!(report.mode_used, Mode::Strict);
        assert_eq!(report.intent, Intent::Coding);
        assert!(report.optimized.starts_with("Be precise and factual: "));
    }
}
