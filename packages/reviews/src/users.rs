//! Lookup seam to the external account subsystem.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::entity::user;
use crate::error::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
    pub display_name: String,
}

/// Resolves an opaque user id to the author details reviews need.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn resolve(&self, user_id: i32) -> Result<Option<UserProfile>, StoreError>;
}

/// Directory backed by the `user` table.
#[derive(Clone)]
pub struct UserTable {
    db: DatabaseConnection,
}

impl UserTable {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for UserTable {
    async fn resolve(&self, user_id: i32) -> Result<Option<UserProfile>, StoreError> {
        let profile = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .map(|m| UserProfile {
                id: m.id,
                username: m.username,
                display_name: m.display_name,
            });
        Ok(profile)
    }
}
