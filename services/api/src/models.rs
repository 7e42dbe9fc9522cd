//! API models for request and response payloads
//!
//! The same type serves as request payload, stored row, and response body.
//! An `id` sent by the client is accepted but never trusted: the store
//! assigns it on create and forces the path id on update.

pub mod department;
pub mod employee;
pub mod role;

pub use department::Department;
pub use employee::Employee;
pub use role::Role;

use serde::{Deserialize, Deserializer};

/// Read a payload `id` that may be missing or `null`
pub(crate) fn optional_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}
