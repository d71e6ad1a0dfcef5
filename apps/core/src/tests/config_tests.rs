//! Config Tests
//!
//! Environment resolution, defaults, and startup validation.

use temp_env::with_vars;

use crate::config::Settings;
use crate::error::AppError;

const ALL_VARS: &[&str] = &[
    "PROMPTFORGE_BIND_ADDR",
    "PROMPTFORGE_DEFAULT_MODEL",
    "PROMPTFORGE_AI_ENABLED",
    "PROMPTFORGE_AI_ENDPOINT",
    "PROMPTFORGE_AI_MODEL",
    "OPENROUTER_API_KEY",
];

fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
    ALL_VARS.iter().map(|v| (*v, None)).collect()
}

#[test]
fn test_defaults_apply_when_env_is_empty() {
    with_vars(unset_all(), || {
        let settings = Settings::from_env().unwrap();

        assert_eq!(settings.bind_addr, "127.0.0.1:8090");
        assert_eq!(settings.default_model, "gemma-3-12b");
        assert!(!settings.ai.enabled);
        assert!(settings.ai.api_key.is_none());
        assert!(!settings.ai_available());
    });
}

#[test]
fn test_env_overrides_are_honored() {
    let mut vars = unset_all();
    vars.retain(|(k, _)| *k != "PROMPTFORGE_BIND_ADDR" && *k != "PROMPTFORGE_DEFAULT_MODEL");
    vars.push(("PROMPTFORGE_BIND_ADDR", Some("0.0.0.0:9000")));
    vars.push(("PROMPTFORGE_DEFAULT_MODEL", Some("gpt-4o")));

    with_vars(vars, || {
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.bind_addr, "0.0.0.0:9000");
        assert_eq!(settings.default_model, "gpt-4o");
    });
}

#[test]
fn test_unknown_default_model_fails_at_startup() {
    let mut vars = unset_all();
    vars.retain(|(k, _)| *k != "PROMPTFORGE_DEFAULT_MODEL");
    vars.push(("PROMPTFORGE_DEFAULT_MODEL", Some("gpt-9000")));

    with_vars(vars, || {
        let err = Settings::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
    });
}

#[test]
fn test_ai_enabled_without_key_is_rejected() {
    let mut vars = unset_all();
    vars.retain(|(k, _)| *k != "PROMPTFORGE_AI_ENABLED");
    vars.push(("PROMPTFORGE_AI_ENABLED", Some("true")));

    with_vars(vars, || {
        let err = Settings::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
    });
}

#[test]
fn test_ai_available_requires_toggle_and_key() {
    let mut vars = unset_all();
    vars.retain(|(k, _)| *k != "PROMPTFORGE_AI_ENABLED" && *k != "OPENROUTER_API_KEY");
    vars.push(("PROMPTFORGE_AI_ENABLED", Some("1")));
    vars.push(("OPENROUTER_API_KEY", Some("sk-or-test")));

    with_vars(vars, || {
        let settings = Settings::from_env().unwrap();
        assert!(settings.ai_available());
        assert_eq!(settings.ai.api_key.as_deref(), Some("sk-or-test"));
    });
}
