//! Shared validation primitives.
//!
//! Validators are plain functions that collect every violated rule into a
//! `Vec<Violation>` instead of failing on the first problem, so the HTTP
//! layer can report them all at once.

use serde::Serialize;

/// A single violated field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The offending field, in request naming.
    pub field: &'static str,
    /// Human-readable description of the rule that failed.
    pub message: String,
}

impl Violation {
    /// Create a violation for the given field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Minimal email shape check: non-empty local part, `@`, and a dot in the
/// domain. Matches the permissive rule the platform has always used.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Push a violation when a required string field is empty or whitespace.
pub fn require(violations: &mut Vec<Violation>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.push(Violation::new(field, format!("{field} is required")));
    }
}
