use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl Author {
    pub fn new(id: i32, name: String) -> Self {
        Self { id, name }
    }
}
