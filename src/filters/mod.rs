//! Filter validation: raw transport input to a typed [`crate::domain::FilterSet`].
//!
//! ```text
//! JSON body ──┐
//!             ├── RawFilters ── validate(schema, policy) ── FilterSet
//! URL query ──┘                        │
//!                                      └── ValidationError (all issues)
//! ```

pub mod error;
pub mod policy;
pub mod raw;
pub mod schema;

pub use error::{FilterIssue, ValidationError, ValidationErrorKind};
pub use policy::{EmptyValuePolicy, ValidationPolicy};
pub use raw::{RawFilters, RawValue};
pub use schema::{FILTER_SCHEMA, FieldKind, FieldSpec, field_spec, validate};
