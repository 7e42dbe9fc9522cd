//! Role-permission table for the directory endpoints
//!
//! | Resource   | create     | read          | update     | delete |
//! |------------|------------|---------------|------------|--------|
//! | Department | admin      | authenticated | admin      | admin  |
//! | Employee   | admin, hr  | authenticated | admin, hr  | admin  |
//! | Role       | closed     | authenticated | closed     | closed |

use auth::Identity;
use common::RoleName;
use tracing::warn;

use crate::error::{ApiError, ApiResult};

/// Resource guarded by the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Department,
    Employee,
    Role,
}

/// Operation on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

/// Who may perform an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any caller holding a valid token
    Authenticated,
    /// Only callers holding one of these roles
    Roles(&'static [RoleName]),
    /// Nobody; the operation is not exposed
    Closed,
}

const ADMIN: &[RoleName] = &[RoleName::Admin];
const ADMIN_OR_HR: &[RoleName] = &[RoleName::Admin, RoleName::Hr];

/// Look up the access rule for an operation
pub fn required_access(resource: Resource, action: Action) -> Access {
    match (resource, action) {
        (_, Action::Read) => Access::Authenticated,
        (Resource::Department, _) => Access::Roles(ADMIN),
        (Resource::Employee, Action::Create | Action::Update) => Access::Roles(ADMIN_OR_HR),
        (Resource::Employee, Action::Delete) => Access::Roles(ADMIN),
        (Resource::Role, _) => Access::Closed,
    }
}

/// Check that the caller may perform an operation
///
/// A role claim that names no known role is still authenticated, so it may
/// read but never write.
pub fn authorize(identity: &Identity, resource: Resource, action: Action) -> ApiResult<()> {
    let allowed = match required_access(resource, action) {
        Access::Authenticated => true,
        Access::Roles(roles) => {
            RoleName::parse(&identity.role).is_some_and(|role| roles.contains(&role))
        }
        Access::Closed => false,
    };

    if allowed {
        Ok(())
    } else {
        warn!(
            "Role `{}` may not {:?} {:?}",
            identity.role, action, resource
        );
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: &str) -> Identity {
        Identity {
            role: role.to_string(),
        }
    }

    fn allowed(role: &str, resource: Resource, action: Action) -> bool {
        authorize(&identity(role), resource, action).is_ok()
    }

    #[test]
    fn everyone_authenticated_can_read() {
        for role in ["admin", "hr", "employee", "intern"] {
            for resource in [Resource::Department, Resource::Employee, Resource::Role] {
                assert!(allowed(role, resource, Action::Read), "{role} reading {resource:?}");
            }
        }
    }

    #[test]
    fn department_writes_are_admin_only() {
        for action in [Action::Create, Action::Update, Action::Delete] {
            assert!(allowed("admin", Resource::Department, action));
            assert!(!allowed("hr", Resource::Department, action));
            assert!(!allowed("employee", Resource::Department, action));
        }
    }

    #[test]
    fn employee_writes() {
        for action in [Action::Create, Action::Update] {
            assert!(allowed("admin", Resource::Employee, action));
            assert!(allowed("hr", Resource::Employee, action));
            assert!(!allowed("employee", Resource::Employee, action));
        }
        assert!(allowed("admin", Resource::Employee, Action::Delete));
        assert!(!allowed("hr", Resource::Employee, Action::Delete));
        assert!(!allowed("employee", Resource::Employee, Action::Delete));
    }

    #[test]
    fn role_writes_are_closed_even_to_admin() {
        for action in [Action::Create, Action::Update, Action::Delete] {
            assert_eq!(required_access(Resource::Role, action), Access::Closed);
            assert!(!allowed("admin", Resource::Role, action));
        }
    }

    #[test]
    fn unknown_or_miscased_roles_cannot_write() {
        for role in ["intern", "Admin", "", "HR"] {
            assert!(matches!(
                authorize(&identity(role), Resource::Employee, Action::Create),
                Err(ApiError::Forbidden)
            ));
        }
    }
}
