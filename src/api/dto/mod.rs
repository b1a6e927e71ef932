//! Data Transfer Objects for REST request/response serialization.

pub mod like_dto;
pub mod listing_dto;

pub use like_dto::*;
pub use listing_dto::*;
