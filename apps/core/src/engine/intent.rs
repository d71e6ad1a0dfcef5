//! Intent classification using regex patterns.
//!
//! Fast pattern-based detection of what a prompt is asking for, plus a
//! mode recommendation for callers that request "recommended".
//! No ML model required - pure Rust regex matching.
//!
//! Both classifiers walk a fixed, ordered list of pattern groups and return
//! the first group that matches. The ordering is load-bearing: a prompt
//! containing both "write" and "function" must resolve to the earlier group.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Detected content intent, used to pick a scaffold template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    /// Code-related request (code, function, debug, etc.)
    Coding,
    /// Analysis request (analyze, compare, evaluate, etc.)
    Analytical,
    /// Data work (data, plot, chart, visualize, etc.)
    DataScience,
    /// Creative writing (write, story, poem, etc.)
    CreativeWriting,
    /// Default when nothing else matches
    General,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Coding => "coding",
            Intent::Analytical => "analytical",
            Intent::DataScience => "data-science",
            Intent::CreativeWriting => "creative-writing",
            Intent::General => "general",
        }
    }
}

/// Stylistic directive controlling the tone of the scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Strict,
    Balanced,
    Creative,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Mode {
    /// Returns the wire label for the mode
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Balanced => "balanced",
            Mode::Creative => "creative",
        }
    }
}

/// Pattern group for first-match-wins classification
struct IntentPattern {
    intent: Intent,
    patterns: &'static LazyLock<Vec<Regex>>,
}

struct ModePattern {
    mode: Mode,
    patterns: &'static LazyLock<Vec<Regex>>,
}

// Compile patterns once at startup.
// expect() is acceptable here: a malformed pattern is unrecoverable.
static CODING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(code|script|program|function|method|class)\b")
            .expect("Invalid regex: coding keywords"),
        Regex::new(r"(?i)\b(algorithm|debug|syntax|compile|refactor)\b")
            .expect("Invalid regex: coding activity keywords"),
    ]
});

static ANALYTICAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(analyze|analyse|examine|evaluate|assess)\b")
            .expect("Invalid regex: analysis verbs"),
        Regex::new(r"(?i)\b(compare|research|review)\b")
            .expect("Invalid regex: comparison verbs"),
    ]
});

static DATA_SCIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(data|dataset|statistics)\b")
            .expect("Invalid regex: data nouns"),
        Regex::new(r"(?i)\b(plot|graph|visualize|visualise|chart)\b")
            .expect("Invalid regex: visualization verbs"),
    ]
});

static CREATIVE_WRITING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\b(write|create|compose|draft)\b")
            .expect("Invalid regex: creative verbs"),
        Regex::new(r"(?i)\b(story|narrative|tale|article|poem|essay)\b")
            .expect("Invalid regex: creative nouns"),
    ]
});

static STRICT_MODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![Regex::new(r"(?i)\b(code|debug|program|function|algorithm|syntax)\b")
        .expect("Invalid regex: strict mode keywords")]
});

static BALANCED_MODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![Regex::new(r"(?i)\b(explain|describe|how|what|why|analyze|analyse|review|compare)\b")
        .expect("Invalid regex: balanced mode keywords")]
});

static CREATIVE_MODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![Regex::new(r"(?i)\b(brainstorm|idea|story|creative|write|generate|design)\b")
        .expect("Invalid regex: creative mode keywords")]
});

static SUMMARY_MODE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![Regex::new(r"(?i)\b(summarize|summarise|concise|brief|short)\b")
        .expect("Invalid regex: summary mode keywords")]
});

/// Intent and mode classifier using ordered regex pattern groups
pub struct IntentClassifier {
    intents: Vec<IntentPattern>,
    modes: Vec<ModePattern>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new classifier with all pattern groups in priority order
    pub fn new() -> Self {
        // Coding is tested before creative writing so that "write a function"
        // scaffolds as code, not prose.
        let intents = vec![
            IntentPattern {
                intent: Intent::Coding,
                patterns: &CODING_PATTERNS,
            },
            IntentPattern {
                intent: Intent::Analytical,
                patterns: &ANALYTICAL_PATTERNS,
            },
            IntentPattern {
                intent: Intent::DataScience,
                patterns: &DATA_SCIENCE_PATTERNS,
            },
            IntentPattern {
                intent: Intent::CreativeWriting,
                patterns: &CREATIVE_WRITING_PATTERNS,
            },
        ];

        let modes = vec![
            ModePattern {
                mode: Mode::Strict,
                patterns: &STRICT_MODE_PATTERNS,
            },
            ModePattern {
                mode: Mode::Balanced,
                patterns: &BALANCED_MODE_PATTERNS,
            },
            ModePattern {
                mode: Mode::Creative,
                patterns: &CREATIVE_MODE_PATTERNS,
            },
            ModePattern {
                mode: Mode::Strict,
                patterns: &SUMMARY_MODE_PATTERNS,
            },
        ];

        Self { intents, modes }
    }

    /// Classify the content intent of a text.
    ///
    /// First pattern group that matches wins. Empty or unmatched text
    /// returns `Intent::General`; classification never fails.
    pub fn classify(&self, text: &str) -> Intent {
        let text = text.trim();
        if text.is_empty() {
            return Intent::General;
        }

        for group in &self.intents {
            if group.patterns.iter().any(|p| p.is_match(text)) {
                return group.intent;
            }
        }

        Intent::General
    }

    /// Recommend a mode for a text.
    ///
    /// Same first-match-wins walk over a distinct priority list; falls back
    /// to `Mode::Balanced`.
    pub fn recommend_mode(&self, text: &str) -> Mode {
        let text = text.trim();
        if text.is_empty() {
            return Mode::Balanced;
        }

        for group in &self.modes {
            if group.patterns.iter().any(|p| p.is_match(text)) {
                return group.mode;
            }
        }

        Mode::Balanced
    }
}
