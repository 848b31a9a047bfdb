//! Resolution and shell errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A string key that is not a member of a closed key set.
#[error("`{value}` is not a valid {dimension} (expected one of: {expected})")]
pub struct InvalidKey {
    /// Dimension the key was parsed for.
    pub dimension: &'static str,
    /// Rejected input.
    pub value: String,
    /// Declared keys, `|`-separated.
    pub expected: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised at the resolution boundary.
///
/// The resolver never recovers from these. Substituting a default is a caller decision.
pub enum UiError {
    /// Component kind name is not declared.
    #[error("unknown component kind `{0}`")]
    UnknownKind(String),
    /// A dimension value outside the kind's declared key set.
    #[error("invalid {dimension} `{value}` for {kind} (expected one of: {expected})")]
    InvalidAttribute {
        /// Component kind being resolved.
        kind: &'static str,
        /// Dimension name such as `variant` or `size`.
        dimension: &'static str,
        /// Rejected input.
        value: String,
        /// Declared keys, `|`-separated.
        expected: String,
    },
    /// The kind has no such dimension.
    #[error("{kind} has no `{dimension}` dimension")]
    UnknownDimension {
        /// Component kind being resolved.
        kind: &'static str,
        /// Requested dimension name.
        dimension: String,
    },
    /// The kind does not declare the requested state flag.
    #[error("{kind} does not support the `{flag}` state")]
    UnsupportedState {
        /// Component kind being resolved.
        kind: &'static str,
        /// Requested flag name.
        flag: String,
    },
    /// A choice kind was rendered without options.
    #[error("{kind} requires at least one option")]
    MissingOptions {
        /// Component kind being rendered.
        kind: &'static str,
    },
}

impl InvalidKey {
    /// Attributes the rejected key to a component kind.
    pub fn for_kind(self, kind: &'static str) -> UiError {
        UiError::InvalidAttribute {
            kind,
            dimension: self.dimension,
            value: self.value,
            expected: self.expected,
        }
    }
}
