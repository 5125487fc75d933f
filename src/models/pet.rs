use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub age: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub breed: String,
    /// Pounds.
    pub weight: f64,
    pub owner_id: i64,
}

impl Record for Pet {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /pets` and `PUT /pets`. The id is assigned server-side.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PetForm {
    pub name: String,
    pub age: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub breed: String,
    pub weight: f64,
    pub owner_id: i64,
}

impl PetForm {
    pub fn into_pet(self, id: i64) -> Pet {
        Pet {
            id,
            name: self.name,
            age: self.age,
            kind: self.kind,
            breed: self.breed,
            weight: self.weight,
            owner_id: self.owner_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetIdQuery {
    pub pet_id: i64,
}
