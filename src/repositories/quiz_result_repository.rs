use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::QuizResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    /// Idempotent upsert keyed by result id.
    async fn save(&self, result: QuizResult) -> AppResult<QuizResult>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizResult>>;
    async fn find_by_lesson_plan(&self, lesson_plan_id: &str) -> AppResult<Vec<QuizResult>>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>>;
    async fn has_user_completed(&self, lesson_plan_id: &str, user_id: &str) -> AppResult<bool>;
}

pub struct MongoQuizResultRepository {
    collection: Collection<QuizResult>,
}

impl MongoQuizResultRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_results");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let plan_user_index = IndexModel::builder()
            .keys(doc! { "lesson_plan_id": 1, "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("lesson_plan_user".to_string())
                    .build(),
            )
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(plan_user_index).await?;
        self.collection.create_index(user_id_index).await?;

        log::info!("Successfully created indexes for quiz_results collection");
        Ok(())
    }
}

#[async_trait]
impl QuizResultRepository for MongoQuizResultRepository {
    async fn save(&self, result: QuizResult) -> AppResult<QuizResult> {
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(doc! { "id": &result.id }, &result)
            .with_options(options)
            .await?;

        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizResult>> {
        let result = self.collection.find_one(doc! { "id": id }).await?;
        Ok(result)
    }

    async fn find_by_lesson_plan(&self, lesson_plan_id: &str) -> AppResult<Vec<QuizResult>> {
        let results = self
            .collection
            .find(doc! { "lesson_plan_id": lesson_plan_id })
            .sort(doc! { "completed_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>> {
        let results = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "completed_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }

    async fn has_user_completed(&self, lesson_plan_id: &str, user_id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .find_one(doc! {
                "lesson_plan_id": lesson_plan_id,
                "user_id": user_id
            })
            .await?;
        Ok(result.is_some())
    }
}
