//! Todo domain entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A todo record as stored by the remote API.
///
/// `id` is assigned by the server. `name` is whatever the user typed,
/// including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub name: String,
}

impl Entity for Todo {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

impl Todo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_remote_record_ignoring_extra_fields() {
        let json = r#"{"id":"a1","name":"buy milk","createdAt":"2024-01-01T00:00:00Z","__typename":"Todo"}"#;
        let todo: Todo = serde_json::from_str(json).expect("decode");
        assert_eq!(todo, Todo::new("a1", "buy milk"));
        assert_eq!(todo.id(), "a1");
    }
}
