use async_trait::async_trait;
use dashmap::DashMap;

use crate::store::{StoreError, UserStore};
use crate::types::{House, User};

/// In-process users table with the same upsert semantics as DynamoDB.
#[derive(Default)]
pub struct MemoryUserStore {
    items: DashMap<String, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.items.get(email).map(|entry| entry.value().clone()))
    }

    async fn put(&self, user: &User) -> Result<(), StoreError> {
        self.items.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn set_fields(
        &self,
        email: &str,
        house: House,
        updated_at: &str,
    ) -> Result<(), StoreError> {
        self.items
            .entry(email.to_string())
            .and_modify(|user| {
                user.hogwarts_house = house;
                user.updated_at = updated_at.to_string();
            })
            .or_insert_with(|| User {
                hogwarts_house: house,
                email: email.to_string(),
                updated_at: updated_at.to_string(),
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, house: House, updated_at: &str) -> User {
        User {
            hogwarts_house: house,
            email: email.to_string(),
            updated_at: updated_at.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryUserStore::new();
        assert_eq!(store.get("nobody@hogwarts.co.uk").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_key() {
        let store = MemoryUserStore::new();
        let email = "harry@hogwarts.co.uk";
        store.put(&user(email, House::Gryffindor, "2020-01-01T00:00:00Z")).await.unwrap();
        store.put(&user(email, House::Slytherin, "2021-01-01T00:00:00Z")).await.unwrap();

        assert_eq!(store.len(), 1);
        let stored = store.get(email).await.unwrap().unwrap();
        assert_eq!(stored.hogwarts_house, House::Slytherin);
        assert_eq!(stored.updated_at, "2021-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn test_update_fields_returns_refreshed_record() {
        let store = MemoryUserStore::new();
        let email = "hermione@hogwarts.co.uk";
        store.put(&user(email, House::Gryffindor, "2020-01-01T00:00:00Z")).await.unwrap();

        let updated = store
            .update_fields(email, House::Ravenclaw, "2022-02-02T00:00:00Z")
            .await
            .unwrap();
        assert_eq!(updated, user(email, House::Ravenclaw, "2022-02-02T00:00:00Z"));
    }

    #[tokio::test]
    async fn test_update_fields_creates_absent_key() {
        let store = MemoryUserStore::new();
        let email = "neville@hogwarts.co.uk";

        let updated = store
            .update_fields(email, House::Hufflepuff, "2023-03-03T00:00:00Z")
            .await
            .unwrap();
        assert_eq!(updated.email, email);
        assert_eq!(store.len(), 1);
    }
}
