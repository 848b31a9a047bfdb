//! Structured xtask error types.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// Stable error categories for xtask workflows.
///
/// Categories stay coarse so failures read well on the terminal and map onto exit behavior
/// without exposing command internals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum XtaskErrorCategory {
    /// Invalid or unreadable configuration.
    Config,
    /// Invalid user input or semantically invalid request.
    Validation,
    /// Filesystem or general I/O failure.
    Io,
    /// Resolver tables and published manifest disagree.
    Consistency,
}

/// Structured xtask error with contextual metadata.
///
/// Optional `operation`, `target`, and `hint` fields are attached as the error propagates so the
/// message stays actionable where it is shown.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XtaskError {
    /// High-level error category.
    pub category: XtaskErrorCategory,
    /// Human-readable message.
    pub message: String,
    /// Optional operation name.
    pub operation: Option<String>,
    /// Optional path target.
    pub target: Option<String>,
    /// Optional remediation hint.
    pub hint: Option<String>,
}

/// Convenience result type for xtask internals.
pub type XtaskResult<T> = Result<T, XtaskError>;

impl XtaskError {
    /// Create an error with the given category and message.
    pub fn new(category: XtaskErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            operation: None,
            target: None,
            hint: None,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Config, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Validation, message)
    }

    /// Create an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Io, message)
    }

    /// Create a consistency error.
    pub fn consistency(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Consistency, message)
    }

    /// Attach an operation label.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Attach a target path.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for XtaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(operation) = &self.operation {
            write!(f, " [operation: {operation}]")?;
        }
        if let Some(target) = &self.target {
            write!(f, " [target: {target}]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " [hint: {hint}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for XtaskError {}

impl From<std::io::Error> for XtaskError {
    fn from(value: std::io::Error) -> Self {
        XtaskError::io(value.to_string())
    }
}

impl From<serde_json::Error> for XtaskError {
    fn from(value: serde_json::Error) -> Self {
        XtaskError::io(format!("failed to serialize manifest: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_appends_context_in_fixed_order() {
        let err = XtaskError::consistency("manifest is stale")
            .with_operation("check")
            .with_path(Path::new("docs/design-system.json"))
            .with_hint("run `cargo xtask manifest`");
        assert_eq!(
            err.to_string(),
            "manifest is stale [operation: check] [target: docs/design-system.json] \
             [hint: run `cargo xtask manifest`]"
        );
    }
}
