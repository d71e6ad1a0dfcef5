//! Test Module
//!
//! Cross-module test suite for the PromptForge backend.
//!
//! ## Test Categories
//! - `engine_tests`: cleaning, classification, scaffolding, full pipeline scenarios
//! - `pricing_tests`: price table, token estimation, cost formatting
//! - `api_tests`: HTTP handler behavior (status codes, response shapes, fallbacks)
//! - `ai_tests`: external rewriter client against a mock server
//! - `config_tests`: environment resolution

pub mod config_tests;
