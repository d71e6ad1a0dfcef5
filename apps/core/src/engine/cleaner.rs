//! Prompt cleaning: whitespace normalization, filler removal, and
//! construction shortening.
//!
//! Every function here is pure and deterministic. The filler vocabulary and
//! rewrite list are fixed; they are the conformance fixture for the whole
//! transformation pipeline, so changing them changes observable output.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of whitespace (including newlines) collapse to a single space.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

/// Hedge words and throat-clearing phrases removed from prompts.
///
/// Multi-word phrases come first so "can you please" is consumed whole
/// instead of leaving "please" behind.
static FILLERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(i want you to|i would like you to|can you please|could you please|make sure to|be sure to|go ahead and|feel free to|thank you|can you|could you|please|kindly|basically|actually|really|very|just|simply|thanks)\b",
    )
    .expect("Invalid regex: filler vocabulary")
});

/// Fixed phrase-level rewrites that shorten common constructions.
static REWRITES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(do not|don['’]t)\b").expect("Invalid regex: do-not"),
            "avoid",
        ),
        (
            Regex::new(r"(?i)\b(it is|it['’]s)\b").expect("Invalid regex: it-is"),
            "is",
        ),
        (
            Regex::new(r"(?i)\b(there is|there['’]s)\b").expect("Invalid regex: there-is"),
            "is",
        ),
        (
            Regex::new(r"(?i)\bthere are\b").expect("Invalid regex: there-are"),
            "are",
        ),
        (
            Regex::new(r"(?i)\bin order to\b").expect("Invalid regex: in-order-to"),
            "to",
        ),
    ]
});

/// Leftover artifacts after deletion: a space sitting before punctuation.
static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.;:!?])").expect("Invalid regex: space before punct"));

/// Collapse whitespace and newline runs to single spaces and trim.
///
/// Idempotent: applying it twice yields the same string as applying it once.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Delete the filler vocabulary, case-insensitive, whole words/phrases only.
///
/// Output word count is always <= input word count.
pub fn strip_fillers(text: &str) -> String {
    let stripped = FILLERS.replace_all(text, "");
    tidy(&stripped)
}

/// Apply the fixed construction rewrites ("do not" -> "avoid", etc.).
pub fn shorten_constructions(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in REWRITES.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    tidy(&out)
}

/// Full cleaning pass: normalize, strip fillers, shorten constructions.
pub fn clean(text: &str) -> String {
    let normalized = normalize_whitespace(text);
    let stripped = strip_fillers(&normalized);
    shorten_constructions(&stripped)
}

/// Repair the seams left by deletions: double spaces, orphaned commas,
/// dangling trailing punctuation.
fn tidy(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let repaired = SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1");
    repaired
        .trim()
        .trim_end_matches([',', ';', ' '])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(
            normalize_whitespace("  hello \n\n  world\t!  "),
            "hello world !"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_whitespace("a  b\nc");
        let twice = normalize_whitespace(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fillers_removed_whole_word() {
        let out = strip_fillers("please kindly write a function, thanks");
        assert_eq!(out, "write a function");

        // "pleased" must survive: whole-word matching only
        let out = strip_fillers("I am pleased with the result");
        assert!(out.contains("pleased"));
    }

    #[test]
    fn test_filler_phrases_consumed_whole() {
        let out = strip_fillers("can you please summarize this report");
        assert_eq!(out, "summarize this report");

        let out = strip_fillers("I want you to review the design");
        assert_eq!(out, "review the design");
    }

    #[test]
    fn test_filler_removal_is_monotonic() {
        let inputs = [
            "please kindly do this very quickly, thank you",
            "just a simple request",
            "no fillers at all here",
            "",
        ];
        for input in inputs {
            let before = input.split_whitespace().count();
            let after = strip_fillers(input).split_whitespace().count();
            assert!(
                after <= before,
                "filler removal grew '{}' from {} to {} words",
                input,
                before,
                after
            );
        }
    }

    #[test]
    fn test_constructions_shortened() {
        assert_eq!(
            shorten_constructions("do not use globals"),
            "avoid use globals"
        );
        assert_eq!(shorten_constructions("don't repeat yourself"), "avoid repeat yourself");
        assert_eq!(shorten_constructions("there are three options"), "are three options");
        assert_eq!(
            shorten_constructions("refactor in order to simplify"),
            "refactor to simplify"
        );
    }

    #[test]
    fn test_clean_full_pass() {
        let out = clean("Please  kindly write\na function to reverse a string, thanks");
        assert_eq!(out, "write a function to reverse a string");
    }
}
