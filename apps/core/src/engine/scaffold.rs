//! Scaffold templates: per-intent instruction wrappers, the skill/role
//! registry, and output-format directives.
//!
//! Two scaffold shapes exist. Without an explicit role the cleaned prompt is
//! wrapped in a single intent-specific instruction sentence. With a role the
//! output is the four-field ROLE / OBJECTIVE / CONTEXT / DATA template, with
//! canned objective/context/data strings chosen by intent.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::intent::Intent;

/// Requested shape of the model's eventual output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
    Markdown,
    Code,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl OutputFormat {
    /// Parse a wire label. Unknown or empty labels default to `Plain`;
    /// format is presentation scaffolding, not a safety boundary.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            "code" | "xml" => OutputFormat::Code,
            _ => OutputFormat::Plain,
        }
    }

    /// Human-readable name used in format directives
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "Plain Text",
            OutputFormat::Json => "JSON",
            OutputFormat::Markdown => "Markdown",
            OutputFormat::Code => "Code",
        }
    }
}

/// Skill registry: short ids mapped to the role titles injected into the
/// scaffold's ROLE field.
pub const SKILL_ROLES: &[(&str, &str)] = &[
    (
        "creative-writer",
        "Award-Winning Creative Writer and Narrative Designer",
    ),
    (
        "code-reviewer",
        "Principal Software Engineer and Code Quality Specialist",
    ),
    (
        "data-analyst",
        "Senior Data Analyst and Business Intelligence Professional",
    ),
    (
        "email-writer",
        "Professional Business Communication Expert and Email Strategist",
    ),
    ("researcher", "Senior Research Analyst and Information Scientist"),
    ("tutor", "Master Educator and Academic Tutor"),
    (
        "translator",
        "Professional Multilingual Translator and Localization Expert",
    ),
    ("copywriter", "Expert Marketing Copywriter"),
    ("general", "Expert Assistant"),
];

/// Skill suggestion cascade, evaluated in order, first match wins.
static SKILL_HINTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(code|script|program|function)\b")
                .expect("Invalid regex: code skill hint"),
            "code-reviewer",
        ),
        (
            Regex::new(r"(?i)\b(analyze|analyse|data|chart|graph)\b")
                .expect("Invalid regex: analyst skill hint"),
            "data-analyst",
        ),
        (
            Regex::new(r"(?i)\b(email|message|correspondence)\b")
                .expect("Invalid regex: email skill hint"),
            "email-writer",
        ),
        (
            Regex::new(r"(?i)\b(research|study|investigate)\b")
                .expect("Invalid regex: research skill hint"),
            "researcher",
        ),
        (
            Regex::new(r"(?i)\b(explain|teach|learn)\b")
                .expect("Invalid regex: tutor skill hint"),
            "tutor",
        ),
        (
            Regex::new(r"(?i)\b(translate|translation)\b")
                .expect("Invalid regex: translator skill hint"),
            "translator",
        ),
        (
            Regex::new(r"(?i)\b(marketing|campaign)\b")
                .expect("Invalid regex: copywriter skill hint"),
            "copywriter",
        ),
        (
            Regex::new(r"(?i)\b(write|create|story|narrative)\b")
                .expect("Invalid regex: writer skill hint"),
            "creative-writer",
        ),
    ]
});

static LIST_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(list|steps?|step by step|guide|how to)\b")
        .expect("Invalid regex: list hint")
});

static COMPARISON_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(compare|comparison|versus|vs|difference|differences)\b")
        .expect("Invalid regex: comparison hint")
});

/// Resolve a requested role: registry ids map to their role title, anything
/// else is used verbatim.
pub fn resolve_role(role: &str) -> String {
    let wanted = role.trim().to_lowercase();
    SKILL_ROLES
        .iter()
        .find(|(id, _)| *id == wanted)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| role.trim().to_string())
}

/// Suggest a skill id for a text via the ordered keyword cascade.
pub fn suggest_skill(text: &str) -> &'static str {
    for (pattern, skill) in SKILL_HINTS.iter() {
        if pattern.is_match(text) {
            return skill;
        }
    }
    "general"
}

/// Wrap a cleaned prompt in its intent's instruction template.
pub fn scaffold(intent: Intent, text: &str) -> String {
    match intent {
        Intent::Coding => format!(
            "Provide a complete, working solution for: {text}. Include clean, \
             well-commented code with error handling and usage examples."
        ),
        Intent::Analytical => format!(
            "Conduct a thorough analysis of: {text}. Support conclusions with \
             evidence, weigh pros and cons, and provide actionable recommendations."
        ),
        Intent::DataScience => format!(
            "Perform the data task: {text}. Follow standard methodology, explain \
             the key steps, and describe relevant visualizations."
        ),
        Intent::CreativeWriting => format!(
            "Create an engaging, well-crafted piece about: {text}. Use vivid \
             descriptions and structure it with a clear beginning, development, \
             and conclusion."
        ),
        Intent::General => format!(
            "Help with: {text}. Provide a comprehensive, well-structured response \
             with step-by-step explanations and relevant examples."
        ),
    }
}

/// Four-field scaffold used when the caller supplies an explicit role.
pub fn scaffold_with_role(intent: Intent, role: &str, text: &str) -> String {
    let (objective, context_tail, data) = match intent {
        Intent::Coding => (
            "Provide a complete, working solution with clean, well-documented code.",
            "Include error handling and examples.",
            "Code should be production-ready, commented, and follow conventions.",
        ),
        Intent::Analytical => (
            "Conduct thorough analysis with evidence-based conclusions.",
            "Consider multiple perspectives.",
            "Support claims with evidence and maintain logical flow.",
        ),
        Intent::DataScience => (
            "Perform the data task following standard methodology.",
            "Address data quality considerations.",
            "Include statistical analysis and interpretation.",
        ),
        Intent::CreativeWriting => (
            "Create engaging, well-crafted content with vivid descriptions and strong narrative flow.",
            "Structure with a clear beginning, development, and conclusion.",
            "Use descriptive language, develop thoroughly, maintain consistent tone.",
        ),
        Intent::General => (
            "Provide a comprehensive, well-structured response.",
            "Include relevant examples.",
            "Ensure accuracy, clarity, and actionable information.",
        ),
    };

    format!(
        "ROLE: {role}\n\nOBJECTIVE: {objective}\n\nCONTEXT: Task: {text}. \
         {context_tail}\n\nDATA: {data}"
    )
}

/// One directive sentence naming the requested format, or `None` for plain
/// output. List-like and comparison-like prompts get a structure-specific
/// directive instead of the generic one.
pub fn format_directive(format: OutputFormat, text: &str) -> Option<String> {
    if format == OutputFormat::Plain {
        return None;
    }

    if LIST_HINT.is_match(text) {
        Some("Format as numbered steps.".to_string())
    } else if COMPARISON_HINT.is_match(text) {
        Some("Use table or structured comparison format.".to_string())
    } else {
        Some(format!("Format the output as {}.", format.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse_defaults_to_plain() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("Markdown"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("xml"), OutputFormat::Code);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Plain);
        assert_eq!(OutputFormat::parse("banana"), OutputFormat::Plain);
        assert_eq!(OutputFormat::parse(""), OutputFormat::Plain);
    }

    #[test]
    fn test_resolve_role_registry_and_verbatim() {
        assert_eq!(
            resolve_role("code-reviewer"),
            "Principal Software Engineer and Code Quality Specialist"
        );
        assert_eq!(resolve_role("  Tutor "), "Master Educator and Academic Tutor");
        assert_eq!(resolve_role("Staff SRE"), "Staff SRE");
    }

    #[test]
    fn test_suggest_skill_cascade_order() {
        // "write" and "function" both present: code wins, it is tested first
        assert_eq!(suggest_skill("write a function"), "code-reviewer");
        assert_eq!(suggest_skill("write a story"), "creative-writer");
        assert_eq!(suggest_skill("translate this paragraph"), "translator");
        assert_eq!(suggest_skill("hello there"), "general");
    }

    #[test]
    fn test_plain_format_has_no_directive() {
        assert_eq!(format_directive(OutputFormat::Plain, "anything"), None);
    }

    #[test]
    fn test_structure_specific_directives() {
        let d = format_directive(OutputFormat::Markdown, "compare cats and dogs");
        assert_eq!(d.as_deref(), Some("Use table or structured comparison format."));

        let d = format_directive(OutputFormat::Json, "give me a list of options");
        assert_eq!(d.as_deref(), Some("Format as numbered steps."));

        let d = format_directive(OutputFormat::Json, "draft an announcement");
        assert_eq!(d.as_deref(), Some("Format the output as JSON."));
    }

    #[test]
    fn test_role_scaffold_shape() {
        let out = scaffold_with_role(Intent::Coding, "Expert Assistant", "sort a vec");
        assert!(out.starts_with("ROLE: Expert Assistant"));
        assert!(out.contains("OBJECTIVE: "));
        assert!(out.contains("CONTEXT: Task: sort a vec."));
        assert!(out.contains("DATA: "));
    }
}
