use crate::domain::model::{ExampleEntity, UserResponse};
use crate::domain::ports::{EntityRepository, UserLookup};
use std::collections::HashMap;

/// In-memory keyed entity store for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    entities: HashMap<i64, ExampleEntity>,
}

impl InMemoryRepository {
    pub fn new(entities: impl IntoIterator<Item = ExampleEntity>) -> Self {
        Self {
            entities: entities
                .into_iter()
                .map(|entity| (entity.example_id, entity))
                .collect(),
        }
    }
}

impl EntityRepository for InMemoryRepository {
    fn find_by_id(&self, example_id: i64) -> Option<ExampleEntity> {
        self.entities.get(&example_id).cloned()
    }

    fn find_all(&self) -> Vec<ExampleEntity> {
        let mut all: Vec<_> = self.entities.values().cloned().collect();
        all.sort_by_key(|entity| entity.example_id);
        all
    }
}

/// In-memory user store; lookup is a straight pass-through.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserLookup {
    users: Vec<UserResponse>,
}

impl InMemoryUserLookup {
    pub fn new(users: impl IntoIterator<Item = UserResponse>) -> Self {
        Self {
            users: users.into_iter().collect(),
        }
    }
}

impl UserLookup for InMemoryUserLookup {
    fn find_by_email(&self, email: &str) -> Option<UserResponse> {
        self.users.iter().find(|user| user.email == email).cloned()
    }

    fn find_all(&self) -> Vec<UserResponse> {
        self.users.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: i64, payload: &str) -> ExampleEntity {
        ExampleEntity {
            example_id: id,
            payload: payload.to_string(),
        }
    }

    #[test]
    fn finds_entities_by_id() {
        let repo = InMemoryRepository::new([entity(1, "first"), entity(2, "second")]);
        assert_eq!(repo.find_by_id(2).unwrap().payload, "second");
        assert!(repo.find_by_id(99).is_none());
    }

    #[test]
    fn find_all_returns_entities_in_id_order() {
        let repo = InMemoryRepository::new([entity(3, "c"), entity(1, "a"), entity(2, "b")]);
        let ids: Vec<_> = repo.find_all().iter().map(|e| e.example_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn looks_up_users_by_email() {
        let lookup = InMemoryUserLookup::new([UserResponse {
            user_id: 1,
            email: "user@example.com".to_string(),
            first_name: Some("Ana".to_string()),
            last_name: None,
        }]);

        assert_eq!(lookup.find_by_email("user@example.com").unwrap().user_id, 1);
        assert!(lookup.find_by_email("missing@example.com").is_none());
        assert_eq!(lookup.find_all().len(), 1);
    }
}
