use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> AppResult<User>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn find_all_paginated(&self, offset: i64, limit: i64) -> AppResult<(Vec<User>, i64)>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("users");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder()
            .unique(true)
            .name("username_unique".to_string())
            .build();
        let model = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(options)
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created unique index on username field");

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        self.collection.insert_one(&user).await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "id": id }).await?;
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(user)
    }

    async fn find_all_paginated(&self, offset: i64, limit: i64) -> AppResult<(Vec<User>, i64)> {
        let total = self.collection.count_documents(doc! {}).await? as i64;

        let find_options = FindOptions::builder()
            .skip(Some(offset as u64))
            .limit(Some(limit))
            .sort(doc! { "username": 1 })
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let users: Vec<User> = cursor.try_collect().await?;

        Ok((users, total))
    }
}
