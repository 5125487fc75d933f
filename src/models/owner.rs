use serde::{Deserialize, Serialize};

use crate::store::Record;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Record for Owner {
    fn id(&self) -> i64 {
        self.id
    }
}
