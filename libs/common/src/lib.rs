//! Common library for the employee directory
//!
//! This crate provides functionality shared between the authentication and
//! API services: the in-memory entity store, the role names known to the
//! system, and the error types and response body used across services.

pub mod error;
pub mod role;
pub mod store;

pub use error::{ErrorResponse, StoreError, StoreResult};
pub use role::RoleName;
pub use store::{Entity, EntityStore};

/// Example usage of the store module
///
/// ```rust
/// use common::store::{Entity, EntityStore};
///
/// #[derive(Clone)]
/// struct Team {
///     id: i64,
///     name: String,
/// }
///
/// impl Entity for Team {
///     const NAME: &'static str = "Team";
///
///     fn id(&self) -> i64 {
///         self.id
///     }
///
///     fn set_id(&mut self, id: i64) {
///         self.id = id;
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let store = EntityStore::new();
///     let team = store.create(Team { id: 0, name: "Platform".into() }).await;
///     assert_eq!(team.id, 1);
///     assert_eq!(store.get(1).await.unwrap().name, "Platform");
/// }
/// ```
pub fn example_usage() {}
