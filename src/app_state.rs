use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoLessonPlanRepository, MongoQuizResultRepository, MongoUserRepository},
    services::{LessonPlanService, QuizSubmissionService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub lesson_plan_service: Arc<LessonPlanService>,
    pub quiz_submission_service: Arc<QuizSubmissionService>,
    pub jwt_service: JwtService,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;
        let user_service = Arc::new(UserService::new(user_repository));

        let lesson_plan_repository = Arc::new(MongoLessonPlanRepository::new(&db));
        lesson_plan_repository.ensure_indexes().await?;
        let lesson_plan_service = Arc::new(LessonPlanService::new(lesson_plan_repository.clone()));

        let quiz_result_repository = Arc::new(MongoQuizResultRepository::new(&db));
        quiz_result_repository.ensure_indexes().await?;
        let quiz_submission_service = Arc::new(QuizSubmissionService::new(
            lesson_plan_repository,
            quiz_result_repository,
            config.allow_retakes,
        ));

        let jwt_service = JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
            config.refresh_expiration_hours,
        );

        Ok(Self {
            user_service,
            lesson_plan_service,
            quiz_submission_service,
            jwt_service,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
