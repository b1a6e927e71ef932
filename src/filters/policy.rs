//! How the validator treats explicitly empty values and filterless input.

use std::str::FromStr;

/// What to do with a filter whose value is empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyValuePolicy {
    /// Treat the field as not provided.
    Ignore,
    /// Fail with an invalid-value error.
    Reject,
}

impl FromStr for EmptyValuePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown empty-value policy '{other}' (expected 'ignore' or 'reject')"
            )),
        }
    }
}

/// Validation knobs for one request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Handling of explicitly empty values.
    pub empty_values: EmptyValuePolicy,
    /// Whether at least one filter must carry a value.
    pub require_filter: bool,
}

impl ValidationPolicy {
    /// Internal query path: empty values are dropped and no filter means
    /// "every listing".
    pub const INTERNAL: Self = Self {
        empty_values: EmptyValuePolicy::Ignore,
        require_filter: false,
    };

    /// Externally-facing request path: empty values are errors and at
    /// least one filter is required.
    pub const EXTERNAL: Self = Self {
        empty_values: EmptyValuePolicy::Reject,
        require_filter: true,
    };
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::EXTERNAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_names() {
        assert_eq!("ignore".parse(), Ok(EmptyValuePolicy::Ignore));
        assert_eq!(" Reject ".parse(), Ok(EmptyValuePolicy::Reject));
        assert!("drop".parse::<EmptyValuePolicy>().is_err());
    }

    #[test]
    fn default_is_external() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::EXTERNAL);
    }
}
