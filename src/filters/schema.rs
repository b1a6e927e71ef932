//! Declared filter schema and the validator that evaluates it.
//!
//! [`FILTER_SCHEMA`] lists every recognized field with the kind of value it
//! expects. [`validate`] walks the schema once, normalizes each field, and
//! returns either a [`FilterSet`] or a single [`ValidationError`] holding
//! every issue found.

use std::collections::BTreeSet;

use super::error::{FilterIssue, ValidationError};
use super::policy::{EmptyValuePolicy, ValidationPolicy};
use super::raw::{RawFilters, RawValue};
use crate::domain::{FilterSet, SaleStatus};

/// Kind of value a filter field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty text, trimmed.
    Text,
    /// Integer, given natively or as decimal text.
    Integer,
    /// Non-empty list of status codes.
    StatusList,
}

/// One recognized filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as sent by clients.
    pub name: &'static str,
    /// Expected value kind.
    pub kind: FieldKind,
}

/// Field name for the city filter.
pub const CITY: &str = "city";
/// Field name for the construction year filter.
pub const CONSTRUCTION_YEAR: &str = "construction_year";
/// Field name for the status filter.
pub const STATUS: &str = "status";

/// Every recognized filter field.
pub const FILTER_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: CITY,
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: CONSTRUCTION_YEAR,
        kind: FieldKind::Integer,
    },
    FieldSpec {
        name: STATUS,
        kind: FieldKind::StatusList,
    },
];

/// Looks up a field in [`FILTER_SCHEMA`].
#[must_use]
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FILTER_SCHEMA.iter().find(|field| field.name == name)
}

/// A field value after normalization.
enum Normalized {
    Absent,
    Text(String),
    Integer(i32),
    Statuses(BTreeSet<SaleStatus>),
}

/// Validates raw input into a [`FilterSet`].
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every invalid field, or demanding
/// a filter when `policy.require_filter` is set and none carries a value.
pub fn validate(raw: &RawFilters, policy: ValidationPolicy) -> Result<FilterSet, ValidationError> {
    let mut filters = FilterSet::default();
    let mut issues = Vec::new();

    for key in raw.unknown_keys() {
        tracing::debug!(key, "ignoring unknown filter key");
    }

    for field in FILTER_SCHEMA {
        let Some(value) = raw.get(field.name) else {
            continue;
        };
        match normalize(field, value, policy.empty_values) {
            Ok(Normalized::Absent) => {}
            Ok(Normalized::Text(city)) => filters.city = Some(city),
            Ok(Normalized::Integer(year)) => filters.construction_year = Some(year),
            Ok(Normalized::Statuses(set)) => filters.statuses = Some(set),
            Err(issue) => issues.push(issue),
        }
    }

    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }

    if policy.require_filter && filters.is_empty() {
        let names: Vec<&str> = FILTER_SCHEMA.iter().map(|s| s.name).collect();
        return Err(ValidationError::single(FilterIssue::invalid_value(
            "*",
            format!("at least one filter is required: {}", names.join(", ")),
        )));
    }

    Ok(filters)
}

fn normalize(
    field: &FieldSpec,
    value: &RawValue,
    empty_values: EmptyValuePolicy,
) -> Result<Normalized, FilterIssue> {
    if matches!(value, RawValue::Null) {
        return Ok(Normalized::Absent);
    }

    if let RawValue::Text(text) = value
        && text.trim().is_empty()
    {
        return match empty_values {
            EmptyValuePolicy::Ignore => Ok(Normalized::Absent),
            EmptyValuePolicy::Reject => Err(FilterIssue::invalid_value(
                field.name,
                format!("'{}' must not be empty", field.name),
            )),
        };
    }

    match field.kind {
        FieldKind::Text => normalize_text(field.name, value),
        FieldKind::Integer => normalize_integer(field.name, value),
        FieldKind::StatusList => normalize_statuses(field.name, value),
    }
}

fn normalize_text(name: &'static str, value: &RawValue) -> Result<Normalized, FilterIssue> {
    match value {
        RawValue::Text(text) => Ok(Normalized::Text(text.trim().to_string())),
        other => Err(FilterIssue::invalid_type(
            name,
            format!("'{name}' must be a string, got {}", other.kind_name()),
        )),
    }
}

fn normalize_integer(name: &'static str, value: &RawValue) -> Result<Normalized, FilterIssue> {
    let wide = match value {
        RawValue::Integer(i) => *i,
        RawValue::Text(text) => text.trim().parse::<i64>().map_err(|_| {
            FilterIssue::invalid_type(
                name,
                format!("'{name}' must be an integer, got '{}'", text.trim()),
            )
        })?,
        other => {
            return Err(FilterIssue::invalid_type(
                name,
                format!("'{name}' must be an integer, got {}", other.kind_name()),
            ));
        }
    };

    i32::try_from(wide)
        .map(Normalized::Integer)
        .map_err(|_| FilterIssue::invalid_value(name, format!("'{name}' is out of range: {wide}")))
}

fn normalize_statuses(name: &'static str, value: &RawValue) -> Result<Normalized, FilterIssue> {
    let RawValue::List(items) = value else {
        return Err(FilterIssue::invalid_type(
            name,
            format!("'{name}' must be a list, got {}", value.kind_name()),
        ));
    };

    if items.is_empty() {
        return Err(FilterIssue::invalid_value(
            name,
            format!("'{name}' must contain at least one status"),
        ));
    }

    let mut statuses = BTreeSet::new();
    for item in items {
        let RawValue::Text(code) = item else {
            return Err(FilterIssue::invalid_type(
                name,
                format!(
                    "'{name}' entries must be strings, got {}",
                    item.kind_name()
                ),
            ));
        };
        let status = code.trim().parse::<SaleStatus>().map_err(|err| {
            FilterIssue::invalid_value(
                name,
                format!("{err}, expected one of: {}", SaleStatus::expected_codes()),
            )
        })?;
        statuses.insert(status);
    }

    Ok(Normalized::Statuses(statuses))
}
