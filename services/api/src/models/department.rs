//! Department model

use common::Entity;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, validate_max_length};

pub const NAME_MAX_LEN: usize = 50;

/// Department entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, deserialize_with = "super::optional_id")]
    pub id: i64,
    pub name: String,
}

impl Entity for Department {
    const NAME: &'static str = "Department";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Validate for Department {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.check("name", validate_max_length(&self.name, NAME_MAX_LEN));
        errors.into_result()
    }
}
