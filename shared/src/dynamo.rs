use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client as DynamoClient};
use std::collections::HashMap;

use crate::store::{StoreError, UserStore};
use crate::types::{House, UnknownHouse, User};

pub const KEY_EMAIL: &str = "email";
pub const ATTR_HOUSE: &str = "hogwartsHouse";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

/// Users table in DynamoDB. The client is built once at cold start and
/// shared by every invocation.
pub struct DynamoUserStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoUserStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (KEY_EMAIL.to_string(), AttributeValue::S(user.email.clone())),
        (ATTR_UPDATED_AT.to_string(), AttributeValue::S(user.updated_at.clone())),
        (
            ATTR_HOUSE.to_string(),
            AttributeValue::S(user.hogwarts_house.as_str().to_string()),
        ),
    ])
}

pub fn item_to_user(
    email: &str,
    item: &HashMap<String, AttributeValue>,
) -> Result<User, StoreError> {
    let malformed = |reason: String| StoreError::Malformed {
        email: email.to_string(),
        reason,
    };
    let string_attr = |name: &str| {
        item.get(name)
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .ok_or_else(|| malformed(format!("missing string attribute {}", name)))
    };

    let hogwarts_house: House = string_attr(ATTR_HOUSE)?
        .parse()
        .map_err(|e: UnknownHouse| malformed(e.to_string()))?;

    Ok(User {
        hogwarts_house,
        email: string_attr(KEY_EMAIL)?,
        updated_at: string_attr(ATTR_UPDATED_AT)?,
    })
}

#[async_trait]
impl UserStore for DynamoUserStore {
    async fn get(&self, email: &str) -> Result<Option<User>, StoreError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_EMAIL, AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        result.item().map(|item| item_to_user(email, item)).transpose()
    }

    async fn put(&self, user: &User) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        tracing::info!("Stored user {} in {}", user.email, self.table_name);
        Ok(())
    }

    async fn set_fields(
        &self,
        email: &str,
        house: House,
        updated_at: &str,
    ) -> Result<(), StoreError> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_EMAIL, AttributeValue::S(email.to_string()))
            .update_expression("SET hogwartsHouse = :hh, updatedAt = :ua")
            .expression_attribute_values(":hh", AttributeValue::S(house.as_str().to_string()))
            .expression_attribute_values(":ua", AttributeValue::S(updated_at.to_string()))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        tracing::info!("Updated user {} in {}", email, self.table_name);
        Ok(())
    }
}
