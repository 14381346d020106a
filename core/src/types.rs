//! Domain DTOs for the todo API.
//!
//! # Design
//! The wire shape is `{ "id": string, "item": string }`. Ids are opaque
//! strings owned by the backend; a numeric id on input is accepted and kept
//! as its decimal text so the rest of the crate only ever sees strings.

use serde::{Deserialize, Deserializer, Serialize};

/// A single todo item as returned by `GET /todo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub item: String,
}

impl Todo {
    pub fn new(id: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
        }
    }
}

/// Request payload for `POST /todo`. The `id` is a provisional guess; the
/// backend's list is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub id: String,
    pub item: String,
}

/// Request payload for `PUT /todo/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditTodo {
    pub item: String,
}

/// Request payload for `DELETE /todo/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveTodo {
    pub id: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
