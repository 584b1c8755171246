use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppError, errors::AppResult, models::domain::LessonPlan};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LessonPlanRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LessonPlan>>;
    async fn create(&self, plan: LessonPlan) -> AppResult<LessonPlan>;
    async fn update(&self, plan: LessonPlan) -> AppResult<LessonPlan>;
    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<LessonPlan>, i64)>;
    async fn list_by_author(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<LessonPlan>, i64)>;
}

pub struct MongoLessonPlanRepository {
    collection: Collection<LessonPlan>,
}

impl MongoLessonPlanRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("lesson_plans");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for lesson_plans collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let author_index = IndexModel::builder()
            .keys(doc! { "created_by_user_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("created_by_user_id".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(author_index).await?;

        log::info!("Successfully created indexes for lesson_plans collection");
        Ok(())
    }
}

#[async_trait]
impl LessonPlanRepository for MongoLessonPlanRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LessonPlan>> {
        let plan = self.collection.find_one(doc! { "id": id }).await?;
        Ok(plan)
    }

    async fn create(&self, plan: LessonPlan) -> AppResult<LessonPlan> {
        self.collection.insert_one(&plan).await?;
        Ok(plan)
    }

    async fn update(&self, plan: LessonPlan) -> AppResult<LessonPlan> {
        let options = ReplaceOptions::builder().upsert(false).build();

        let result = self
            .collection
            .replace_one(doc! { "id": &plan.id }, &plan)
            .with_options(options)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::not_found("lesson plan", plan.id));
        }

        Ok(plan)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<LessonPlan>, i64)> {
        let total = self.collection.count_documents(doc! {}).await? as i64;

        let find_options = FindOptions::builder()
            .skip(Some(offset as u64))
            .limit(Some(limit))
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let items: Vec<LessonPlan> = cursor.try_collect().await?;

        Ok((items, total))
    }

    async fn list_by_author(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<LessonPlan>, i64)> {
        let filter = doc! { "created_by_user_id": user_id };

        let total = self.collection.count_documents(filter.clone()).await? as i64;

        let find_options = FindOptions::builder()
            .skip(Some(offset as u64))
            .limit(Some(limit))
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(filter)
            .with_options(find_options)
            .await?;
        let items: Vec<LessonPlan> = cursor.try_collect().await?;

        Ok((items, total))
    }
}
