use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Veterinarian {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
}

impl Record for Veterinarian {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /vets`. Every field is required; the id is assigned server-side.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VeterinarianForm {
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
}

impl VeterinarianForm {
    pub fn into_veterinarian(self, id: i64) -> Veterinarian {
        Veterinarian {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            specialty: self.specialty,
        }
    }
}
