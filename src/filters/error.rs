//! Aggregated validation failures.

use std::fmt;

/// Classification of a single validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Wrong shape or type.
    InvalidType,
    /// Right shape, semantically invalid.
    InvalidValue,
}

/// One problem found with one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterIssue {
    /// Offending field name, or `"*"` for whole-input problems.
    pub field: &'static str,
    /// Issue classification.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl FilterIssue {
    pub(crate) fn invalid_type(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::InvalidType,
            message: message.into(),
        }
    }

    pub(crate) fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::InvalidValue,
            message: message.into(),
        }
    }
}

/// Every issue found while validating one request.
///
/// The error as a whole is an [`ValidationErrorKind::InvalidType`] as soon
/// as any issue is a type issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<FilterIssue>,
}

impl ValidationError {
    /// Wraps a non-empty list of issues.
    #[must_use]
    pub fn new(issues: Vec<FilterIssue>) -> Self {
        Self { issues }
    }

    /// Single-issue shorthand.
    #[must_use]
    pub fn single(issue: FilterIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Overall classification.
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        if self
            .issues
            .iter()
            .any(|i| i.kind == ValidationErrorKind::InvalidType)
        {
            ValidationErrorKind::InvalidType
        } else {
            ValidationErrorKind::InvalidValue
        }
    }

    /// Individual issues, in schema order.
    #[must_use]
    pub fn issues(&self) -> &[FilterIssue] {
        &self.issues
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.issues.iter().map(|i| i.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}
