//! The fixed enumeration of sale status codes.
//!
//! [`SaleStatus`] mirrors the `status.name` column of the listings
//! database. Parsing is strict: codes are matched case-sensitively and
//! callers are expected to trim input beforehand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sale status of a property.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Announced but not yet on the market.
    PreSale,
    /// Actively on the market.
    ForSale,
    /// Sale completed.
    Sold,
}

impl SaleStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::PreSale, Self::ForSale, Self::Sold];

    /// Returns the wire code stored in the database (e.g. `"for_sale"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PreSale => "pre_sale",
            Self::ForSale => "for_sale",
            Self::Sold => "sold",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreSale => "Pre-sale",
            Self::ForSale => "For sale",
            Self::Sold => "Sold",
        }
    }

    /// Comma-separated list of all codes, for error messages.
    #[must_use]
    pub fn expected_codes() -> String {
        Self::ALL
            .iter()
            .map(|s| s.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not one of the known status codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for SaleStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
