use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub name: String,

    /// Id of the author this book is attributed to. Not checked against the
    /// author sequence; a dangling reference is allowed.
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: String, author_id: i32) -> Self {
        Self {
            id,
            name,
            author_id,
        }
    }
}
