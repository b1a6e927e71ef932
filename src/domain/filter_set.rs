//! Validated, typed listing filters.

use std::collections::BTreeSet;

use super::SaleStatus;

/// Validated predicates for one listings query.
///
/// Produced by [`crate::filters::validate`] and discarded once the query
/// has run. Every field is optional; an empty set matches every property
/// with a current status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    /// Exact city match.
    pub city: Option<String>,
    /// Exact construction year match.
    pub construction_year: Option<i32>,
    /// Current status must be one of these. Never empty when present.
    pub statuses: Option<BTreeSet<SaleStatus>>,
}

impl FilterSet {
    /// Returns `true` when no predicate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.construction_year.is_none() && self.statuses.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(FilterSet::default().is_empty());
    }

    #[test]
    fn any_predicate_makes_it_non_empty() {
        let filters = FilterSet {
            construction_year: Some(2018),
            ..FilterSet::default()
        };
        assert!(!filters.is_empty());
    }
}
