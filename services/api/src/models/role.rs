//! Role model

use common::{Entity, RoleName};
use serde::{Deserialize, Serialize};

/// Role entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: RoleName,
}

impl Role {
    /// Fixed rows the role store starts with: 1=admin, 2=hr, 3=employee
    pub fn seed() -> Vec<Role> {
        RoleName::all()
            .iter()
            .zip(1..)
            .map(|(name, id)| Role { id, name: *name })
            .collect()
    }
}

impl Entity for Role {
    const NAME: &'static str = "Role";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_rows() {
        assert_eq!(
            Role::seed(),
            vec![
                Role { id: 1, name: RoleName::Admin },
                Role { id: 2, name: RoleName::Hr },
                Role { id: 3, name: RoleName::Employee },
            ]
        );
    }

    #[test]
    fn unknown_role_name_does_not_deserialize() {
        assert!(serde_json::from_str::<Role>(r#"{"id":4,"name":"manager"}"#).is_err());
    }
}
