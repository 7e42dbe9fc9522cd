//! Employee model

use common::Entity;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, validate_email, validate_max_length};

pub const NAME_MAX_LEN: usize = 30;

/// Employee entity
///
/// `department_id` and `role_id` are not checked against their stores; an
/// employee may point at a department or role that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, deserialize_with = "super::optional_id")]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: i64,
    pub role_id: i64,
}

impl Entity for Employee {
    const NAME: &'static str = "Employee";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Validate for Employee {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.check("first_name", validate_max_length(&self.first_name, NAME_MAX_LEN));
        errors.check("last_name", validate_max_length(&self.last_name, NAME_MAX_LEN));
        errors.check("email", validate_email(&self.email));
        errors.into_result()
    }
}
