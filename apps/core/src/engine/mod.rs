//! # Engine Module
//!
//! Rule-based prompt transformation for PromptForge.
//! Rewrites free-form prompts into structured, model-ready instructions
//! without calling any external model.
//!
//! ## Components
//! - `intent`: content-intent and mode classification (ordered regex groups)
//! - `cleaner`: whitespace normalization, filler removal, construction shortening
//! - `scaffold`: per-intent templates, skill registry, format directives
//! - `enhancer`: pipeline orchestrator

pub mod cleaner;
pub mod enhancer;
pub mod intent;
pub mod scaffold;

pub use enhancer::{EnhancementReport, ModeChoice, PromptEnhancer};
pub use intent::{Intent, IntentClassifier, Mode};
pub use scaffold::OutputFormat;
