//! Role names known to the directory

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a role a caller can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    /// Full access to departments and employees
    Admin,
    /// Manages employee records
    Hr,
    /// Read-only access
    Employee,
}

impl RoleName {
    /// Returns the role name as it appears in tokens and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "admin",
            RoleName::Hr => "hr",
            RoleName::Employee => "employee",
        }
    }

    /// Parses a role name. Matching is exact: token claims are compared as issued.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(RoleName::Admin),
            "hr" => Some(RoleName::Hr),
            "employee" => Some(RoleName::Employee),
            _ => None,
        }
    }

    /// Returns all role names in seed order.
    pub fn all() -> &'static [RoleName] {
        &[RoleName::Admin, RoleName::Hr, RoleName::Employee]
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
