//! Application state shared across handlers

use auth::{AuthState, CredentialStore, JwtService};
use common::EntityStore;

use crate::models::{Department, Employee, Role};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub departments: EntityStore<Department>,
    pub employees: EntityStore<Employee>,
    pub roles: EntityStore<Role>,
}

impl AppState {
    /// Build the state with empty department and employee stores and the seeded roles
    pub fn new(jwt_service: JwtService, credentials: CredentialStore) -> Self {
        Self {
            auth: AuthState {
                jwt_service,
                credentials,
            },
            departments: EntityStore::new(),
            employees: EntityStore::new(),
            roles: EntityStore::seeded(Role::seed()),
        }
    }
}
