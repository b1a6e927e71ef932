//! Loosely-typed filter input as received from the transport.
//!
//! A JSON body and a URL query string both normalize into [`RawFilters`],
//! so the validator sees one representation regardless of where the
//! filters came from.

use std::collections::BTreeMap;

use super::error::{FilterIssue, ValidationError};
use super::schema::{FieldKind, field_spec};

/// A single raw filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Explicit `null`.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer that fits in `i64`.
    Integer(i64),
    /// Any other number.
    Float(f64),
    /// Text.
    Text(String),
    /// Ordered collection.
    List(Vec<RawValue>),
    /// Nested object; never valid for a filter.
    Object,
}

impl RawValue {
    /// Short type name used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "number",
            Self::Text(_) => "string",
            Self::List(_) => "list",
            Self::Object => "object",
        }
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(_) => Self::Object,
        }
    }
}

/// Raw filter input keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFilters {
    values: BTreeMap<String, RawValue>,
}

impl RawFilters {
    /// Creates an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an invalid-type [`ValidationError`] if the body is not a JSON
    /// object.
    pub fn from_json(body: serde_json::Value) -> Result<Self, ValidationError> {
        match body {
            serde_json::Value::Object(map) => Ok(Self {
                values: map
                    .into_iter()
                    .map(|(k, v)| (k, RawValue::from(v)))
                    .collect(),
            }),
            other => Err(ValidationError::single(FilterIssue::invalid_type(
                "*",
                format!(
                    "request body must be a JSON object, got {}",
                    RawValue::from(other).kind_name()
                ),
            ))),
        }
    }

    /// Normalizes decoded URL query pairs.
    ///
    /// List-kind fields are split on `,` and repeated keys are concatenated.
    /// An empty list-kind value stays an empty string so the empty-value
    /// policy decides its fate.
    ///
    /// # Errors
    ///
    /// Returns an invalid-value [`ValidationError`] if a scalar field is
    /// given more than once.
    pub fn from_query_pairs<I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values: BTreeMap<String, RawValue> = BTreeMap::new();
        let mut issues = Vec::new();

        for (key, value) in pairs {
            let spec = field_spec(&key);
            let is_list = spec.is_some_and(|s| s.kind == FieldKind::StatusList);

            if !is_list {
                if values.contains_key(&key) {
                    if let Some(spec) = spec {
                        issues.push(FilterIssue::invalid_value(
                            spec.name,
                            format!("'{}' may only be given once", spec.name),
                        ));
                    }
                    continue;
                }
                values.insert(key, RawValue::Text(value));
                continue;
            }

            let parsed = if value.trim().is_empty() {
                RawValue::Text(value)
            } else {
                RawValue::List(
                    value
                        .split(',')
                        .map(|part| RawValue::Text(part.to_string()))
                        .collect(),
                )
            };

            match (values.remove(&key), parsed) {
                (Some(RawValue::List(mut existing)), RawValue::List(more)) => {
                    existing.extend(more);
                    values.insert(key, RawValue::List(existing));
                }
                // An empty repetition adds nothing to a real list.
                (Some(existing @ RawValue::List(_)), RawValue::Text(_)) => {
                    values.insert(key, existing);
                }
                (_, parsed) => {
                    values.insert(key, parsed);
                }
            }
        }

        if issues.is_empty() {
            Ok(Self { values })
        } else {
            Err(ValidationError::new(issues))
        }
    }

    /// Returns the raw value of a field, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    /// Iterates over field names not described by the filter schema.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|k| field_spec(k).is_none())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn json_object_maps_values() {
        let Ok(raw) = RawFilters::from_json(json!({
            "city": "Bogota",
            "construction_year": 2018,
            "status": ["sold"],
            "extra": {"nested": true},
        })) else {
            panic!("object body should normalize");
        };
        assert_eq!(raw.get("city"), Some(&RawValue::Text("Bogota".to_string())));
        assert_eq!(raw.get("construction_year"), Some(&RawValue::Integer(2018)));
        assert_eq!(
            raw.get("status"),
            Some(&RawValue::List(vec![RawValue::Text("sold".to_string())]))
        );
        assert_eq!(raw.get("extra"), Some(&RawValue::Object));
        assert_eq!(raw.unknown_keys().collect::<Vec<_>>(), vec!["extra"]);
    }

    #[test]
    fn json_non_object_is_type_error() {
        let Err(err) = RawFilters::from_json(json!(["city", "Bogota"])) else {
            panic!("array body must be rejected");
        };
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn json_float_is_kept_as_float() {
        let Ok(raw) = RawFilters::from_json(json!({"construction_year": 2018.5})) else {
            panic!("object body should normalize");
        };
        assert_eq!(raw.get("construction_year"), Some(&RawValue::Float(2018.5)));
    }

    #[test]
    fn query_status_is_split_on_commas() {
        let Ok(raw) = RawFilters::from_query_pairs(pairs(&[("status", "pre_sale, for_sale")]))
        else {
            panic!("query should normalize");
        };
        assert_eq!(
            raw.get("status"),
            Some(&RawValue::List(vec![
                RawValue::Text("pre_sale".to_string()),
                RawValue::Text(" for_sale".to_string()),
            ]))
        );
    }

    #[test]
    fn repeated_status_keys_are_concatenated() {
        let Ok(raw) =
            RawFilters::from_query_pairs(pairs(&[("status", "sold"), ("status", "for_sale")]))
        else {
            panic!("query should normalize");
        };
        let Some(RawValue::List(items)) = raw.get("status") else {
            panic!("status should be a list");
        };
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn empty_status_stays_text() {
        let Ok(raw) = RawFilters::from_query_pairs(pairs(&[("status", "")])) else {
            panic!("query should normalize");
        };
        assert_eq!(raw.get("status"), Some(&RawValue::Text(String::new())));
    }

    #[test]
    fn repeated_scalar_is_rejected() {
        let result =
            RawFilters::from_query_pairs(pairs(&[("city", "Bogota"), ("city", "Medellin")]));
        let Err(err) = result else {
            panic!("duplicate city must be rejected");
        };
        assert!(err.to_string().contains("only be given once"));
    }

    #[test]
    fn query_scalars_are_text() {
        let Ok(raw) = RawFilters::from_query_pairs(pairs(&[("construction_year", "2018")])) else {
            panic!("query should normalize");
        };
        assert_eq!(
            raw.get("construction_year"),
            Some(&RawValue::Text("2018".to_string()))
        );
    }
}
