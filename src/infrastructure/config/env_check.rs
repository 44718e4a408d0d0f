//! Startup diagnostics for required API keys.

use regex::Regex;
use tracing::warn;

/// Environment variable holding the backend API key.
pub const BACKEND_KEY_VAR: &str = "SOLACE_API_KEY";
/// Environment variable holding the AI collaborator API key.
pub const AI_KEY_VAR: &str = "SOLACE_AI_KEY";

/// What is wrong with a configured key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyIssue {
    /// The variable is unset or empty.
    Missing,
    /// The value matches a known placeholder pattern.
    Placeholder,
}

/// A single diagnostic finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDiagnostic {
    /// Variable name.
    pub var: &'static str,
    /// What was found.
    pub issue: KeyIssue,
}

fn placeholder_pattern() -> Regex {
    Regex::new(r"(?i)(changeme|your[_-]?(api[_-]?)?key|placeholder|^x{3,}$|^todo$)")
        .expect("placeholder pattern is valid")
}

/// Inspects a single key value.
#[must_use]
pub fn inspect_key(var: &'static str, value: Option<&str>) -> Option<KeyDiagnostic> {
    match value {
        None => Some(KeyDiagnostic {
            var,
            issue: KeyIssue::Missing,
        }),
        Some(value) if value.trim().is_empty() => Some(KeyDiagnostic {
            var,
            issue: KeyIssue::Missing,
        }),
        Some(value) if placeholder_pattern().is_match(value) => Some(KeyDiagnostic {
            var,
            issue: KeyIssue::Placeholder,
        }),
        Some(_) => None,
    }
}

/// Checks both required keys from the process environment and logs a
/// developer-facing diagnostic for each finding. Never fails startup.
pub fn diagnose_api_keys() -> Vec<KeyDiagnostic> {
    let diagnostics: Vec<KeyDiagnostic> = [BACKEND_KEY_VAR, AI_KEY_VAR]
        .into_iter()
        .filter_map(|var| inspect_key(var, std::env::var(var).ok().as_deref()))
        .collect();

    for diagnostic in &diagnostics {
        match diagnostic.issue {
            KeyIssue::Missing => {
                warn!(var = diagnostic.var, "API key not set; remote features will degrade");
            }
            KeyIssue::Placeholder => {
                warn!(
                    var = diagnostic.var,
                    "API key looks like a placeholder; replace it with a real key"
                );
            }
        }
    }

    diagnostics
}
