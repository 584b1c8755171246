use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use aula_server::{
    errors::{AppError, AppResult},
    models::domain::{LessonPlan, QuizResult, User},
    repositories::{LessonPlanRepository, QuizResultRepository, UserRepository},
};

fn page<T: Clone>(mut items: Vec<T>, offset: i64, limit: i64) -> (Vec<T>, i64) {
    let total = items.len() as i64;
    let start = offset.max(0) as usize;
    let end = (start + limit.max(0) as usize).min(items.len());

    items = if start >= items.len() {
        vec![]
    } else {
        items[start..end].to_vec()
    };

    (items, total)
}

pub struct InMemoryLessonPlanRepository {
    plans: Arc<RwLock<HashMap<String, LessonPlan>>>,
}

impl InMemoryLessonPlanRepository {
    pub fn new() -> Self {
        Self {
            plans: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl LessonPlanRepository for InMemoryLessonPlanRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<LessonPlan>> {
        let plans = self.plans.read().await;
        Ok(plans.get(id).cloned())
    }

    async fn create(&self, plan: LessonPlan) -> AppResult<LessonPlan> {
        let mut plans = self.plans.write().await;
        if plans.contains_key(&plan.id) {
            return Err(AppError::AlreadyExists(format!(
                "Lesson plan with id '{}' already exists",
                plan.id
            )));
        }

        plans.insert(plan.id.clone(), plan.clone());
        Ok(plan)
    }

    async fn update(&self, plan: LessonPlan) -> AppResult<LessonPlan> {
        let mut plans = self.plans.write().await;
        if !plans.contains_key(&plan.id) {
            return Err(AppError::not_found("lesson plan", plan.id));
        }

        plans.insert(plan.id.clone(), plan.clone());
        Ok(plan)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<LessonPlan>, i64)> {
        let plans = self.plans.read().await;
        let mut items: Vec<_> = plans.values().cloned().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(page(items, offset, limit))
    }

    async fn list_by_author(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<LessonPlan>, i64)> {
        let plans = self.plans.read().await;
        let mut items: Vec<_> = plans
            .values()
            .filter(|p| p.created_by_user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(page(items, offset, limit))
    }
}

pub struct InMemoryQuizResultRepository {
    results: Arc<RwLock<HashMap<String, QuizResult>>>,
}

impl InMemoryQuizResultRepository {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl QuizResultRepository for InMemoryQuizResultRepository {
    async fn save(&self, result: QuizResult) -> AppResult<QuizResult> {
        let mut results = self.results.write().await;
        results.insert(result.id.clone(), result.clone());
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizResult>> {
        let results = self.results.read().await;
        Ok(results.get(id).cloned())
    }

    async fn find_by_lesson_plan(&self, lesson_plan_id: &str) -> AppResult<Vec<QuizResult>> {
        let results = self.results.read().await;
        let mut items: Vec<_> = results
            .values()
            .filter(|r| r.lesson_plan_id == lesson_plan_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.completed_at.cmp(&a.completed_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>> {
        let results = self.results.read().await;
        let mut items: Vec<_> = results
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.completed_at.cmp(&a.completed_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn has_user_completed(&self, lesson_plan_id: &str, user_id: &str) -> AppResult<bool> {
        let results = self.results.read().await;
        Ok(results
            .values()
            .any(|r| r.lesson_plan_id == lesson_plan_id && r.user_id == user_id))
    }
}

pub struct InMemoryUserRepository {
    users_by_username: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users_by_username: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users_by_username.write().await;

        if users.contains_key(&user.username) {
            return Err(AppError::AlreadyExists(format!(
                "User with username '{}' already exists",
                user.username
            )));
        }

        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users_by_username.read().await;
        Ok(users.values().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users_by_username.read().await;
        Ok(users.get(username).cloned())
    }

    async fn find_all_paginated(&self, offset: i64, limit: i64) -> AppResult<(Vec<User>, i64)> {
        let users = self.users_by_username.read().await;
        let mut items: Vec<_> = users.values().cloned().collect();
        items.sort_by(|a, b| a.username.cmp(&b.username));

        Ok(page(items, offset, limit))
    }
}
