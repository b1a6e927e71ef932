//! Latest-status listing query construction.
//!
//! The current status of every property is resolved per query with a
//! window ranking over `status_history`, partitioned by property and
//! ordered by `(update_date DESC, id DESC)`. Rank 1 is the current status.
//! Filter predicates are appended conjunctively and every value is bound
//! as a parameter.

use std::fmt;

use sqlx::{QueryBuilder, Sqlite};

use crate::domain::FilterSet;

/// Property rows joined with their rank-1 status event and its label.
const LATEST_STATUS_SELECT: &str = r#"SELECT
    p.id AS property_id,
    p.address AS address,
    p.city AS city,
    st.name AS status_code,
    st.label AS status_label,
    p.price AS sale_price,
    p.year AS construction_year,
    cs.update_date AS last_update
FROM property p
INNER JOIN (
    SELECT
        property_id,
        status_id,
        update_date,
        ROW_NUMBER() OVER (
            PARTITION BY property_id
            ORDER BY update_date DESC, id DESC
        ) AS rn
    FROM status_history
) cs ON cs.property_id = p.id AND cs.rn = 1
INNER JOIN status st ON st.id = cs.status_id"#;

const ORDER_BY: &str = " ORDER BY p.id ASC";

/// A built listings query, ready to run once.
///
/// The bound arguments are handed to the driver on the first execution;
/// the query cannot be replayed afterwards.
pub struct ListingQuery {
    builder: QueryBuilder<'static, Sqlite>,
    bind_count: usize,
    consumed: bool,
}

impl ListingQuery {
    /// Builds the query for the given filters.
    #[must_use]
    pub fn new(filters: &FilterSet) -> Self {
        let mut builder: QueryBuilder<'static, Sqlite> = QueryBuilder::new(LATEST_STATUS_SELECT);
        let mut predicates = 0usize;
        let mut bind_count = 0usize;

        if let Some(city) = &filters.city {
            push_conjunction(&mut builder, &mut predicates);
            builder.push("p.city = ").push_bind(city.clone());
            bind_count += 1;
        }

        if let Some(year) = filters.construction_year {
            push_conjunction(&mut builder, &mut predicates);
            builder.push("p.year = ").push_bind(year);
            bind_count += 1;
        }

        if let Some(statuses) = &filters.statuses {
            push_conjunction(&mut builder, &mut predicates);
            builder.push("st.name IN (");
            let mut codes = builder.separated(", ");
            for status in statuses {
                codes.push_bind(status.code());
                bind_count += 1;
            }
            codes.push_unseparated(")");
        }

        builder.push(ORDER_BY);

        Self {
            builder,
            bind_count,
            consumed: false,
        }
    }

    /// Returns the generated SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        self.builder.sql()
    }

    /// Returns the number of bound parameters.
    #[must_use]
    pub const fn bind_count(&self) -> usize {
        self.bind_count
    }

    /// Returns `true` once the query has been handed to the driver.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Marks the query as executed and exposes the builder, or returns
    /// `None` if it already ran.
    pub(crate) fn take_builder(&mut self) -> Option<&mut QueryBuilder<'static, Sqlite>> {
        if self.consumed {
            return None;
        }
        self.consumed = true;
        Some(&mut self.builder)
    }
}

impl fmt::Debug for ListingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingQuery")
            .field("sql", &self.sql())
            .field("bind_count", &self.bind_count)
            .field("consumed", &self.consumed)
            .finish()
    }
}

fn push_conjunction(builder: &mut QueryBuilder<'static, Sqlite>, predicates: &mut usize) {
    builder.push(if *predicates == 0 { " WHERE " } else { " AND " });
    *predicates += 1;
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::SaleStatus;

    #[test]
    fn no_filters_has_no_where_clause() {
        let query = ListingQuery::new(&FilterSet::default());
        assert!(!query.sql().contains("WHERE"));
        assert!(query.sql().ends_with("ORDER BY p.id ASC"));
        assert_eq!(query.bind_count(), 0);
    }

    #[test]
    fn resolves_latest_status_with_id_tie_break() {
        let query = ListingQuery::new(&FilterSet::default());
        assert!(query.sql().contains("PARTITION BY property_id"));
        assert!(query.sql().contains("ORDER BY update_date DESC, id DESC"));
        assert!(query.sql().contains("cs.rn = 1"));
    }

    #[test]
    fn predicates_are_conjunctive_and_bound() {
        let filters = FilterSet {
            city: Some("Bogota".to_string()),
            construction_year: Some(2018),
            statuses: Some(BTreeSet::from([SaleStatus::PreSale, SaleStatus::ForSale])),
        };
        let query = ListingQuery::new(&filters);
        let sql = query.sql();

        assert!(sql.contains(" WHERE p.city = ? AND p.year = ? AND st.name IN (?, ?)"));
        assert_eq!(query.bind_count(), 4);
        assert!(!sql.contains("Bogota"));
        assert!(!sql.contains("2018"));
        assert!(!sql.contains("pre_sale"));
    }

    #[test]
    fn single_status_predicate() {
        let filters = FilterSet {
            statuses: Some(BTreeSet::from([SaleStatus::Sold])),
            ..FilterSet::default()
        };
        let query = ListingQuery::new(&filters);
        assert!(query.sql().contains(" WHERE st.name IN (?) ORDER BY"));
        assert_eq!(query.bind_count(), 1);
    }

    #[test]
    fn hostile_city_never_reaches_sql_text() {
        let filters = FilterSet {
            city: Some("x' OR '1'='1".to_string()),
            ..FilterSet::default()
        };
        let query = ListingQuery::new(&filters);
        assert!(!query.sql().contains("OR '1'='1"));
        assert!(query.sql().contains("p.city = ?"));
    }

    #[test]
    fn builder_is_handed_out_once() {
        let mut query = ListingQuery::new(&FilterSet::default());
        assert!(!query.is_consumed());
        assert!(query.take_builder().is_some());
        assert!(query.is_consumed());
        assert!(query.take_builder().is_none());
    }
}
