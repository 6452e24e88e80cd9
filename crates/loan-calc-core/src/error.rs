use serde::Serialize;
use thiserror::Error;

/// Input rejected before any computation ran.
///
/// Carries every violated rule, in rule order, never just the first one.
/// Serialises as `{"errors": [...]}` for transport layers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Validation failed: {}", .errors.join("; "))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    /// Build from a non-empty list of rule-violation messages.
    pub fn new(errors: Vec<String>) -> Self {
        debug_assert!(!errors.is_empty(), "ValidationError needs at least one message");
        ValidationError { errors }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
