use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{LessonPlan, QuizQuestion},
    models::dto::request::{CreateLessonPlanRequest, QuizQuestionInput},
    models::dto::response::LessonPlanStudentDto,
    repositories::LessonPlanRepository,
};

pub struct LessonPlanService {
    repository: Arc<dyn LessonPlanRepository>,
}

impl LessonPlanService {
    pub fn new(repository: Arc<dyn LessonPlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_lesson_plan(
        &self,
        request: CreateLessonPlanRequest,
        author_id: &str,
    ) -> AppResult<LessonPlan> {
        request.validate()?;

        let quiz = match request.quiz {
            Some(inputs) if !inputs.is_empty() => Some(Self::build_questions(inputs)?),
            _ => None,
        };

        let plan = LessonPlan::new(
            &request.title,
            &request.subject,
            &request.content,
            author_id,
            quiz,
        );

        log::info!("Creating lesson plan '{}' by user '{}'", plan.id, author_id);
        self.repository.create(plan).await
    }

    fn build_questions(inputs: Vec<QuizQuestionInput>) -> AppResult<Vec<QuizQuestion>> {
        inputs
            .into_iter()
            .map(|input| {
                let option_count = input.options.len() as i16;
                if input.correct_answer < 0 || input.correct_answer >= option_count {
                    return Err(AppError::invalid_argument(format!(
                        "correct_answer {} is out of range for {} options",
                        input.correct_answer, option_count
                    )));
                }
                Ok(QuizQuestion::new(
                    &input.prompt,
                    input.options,
                    input.correct_answer,
                ))
            })
            .collect()
    }

    /// Wholesale replacement of a plan's content and quiz; identity, author
    /// and creation time are kept.
    pub async fn update_lesson_plan(
        &self,
        id: &str,
        request: CreateLessonPlanRequest,
    ) -> AppResult<LessonPlan> {
        request.validate()?;

        let existing = self.get_lesson_plan(id).await?;

        let quiz = match request.quiz {
            Some(inputs) if !inputs.is_empty() => Some(Self::build_questions(inputs)?),
            _ => None,
        };

        let plan = LessonPlan {
            id: existing.id,
            title: request.title,
            subject: request.subject,
            content: request.content,
            created_by_user_id: existing.created_by_user_id,
            quiz,
            created_at: existing.created_at,
            modified_at: Some(Utc::now()),
        };

        self.repository.update(plan).await
    }

    pub async fn get_lesson_plan(&self, id: &str) -> AppResult<LessonPlan> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("lesson plan", id))
    }

    /// Same lookup, projected so the answer key never reaches an aluno.
    pub async fn get_lesson_plan_for_student(&self, id: &str) -> AppResult<LessonPlanStudentDto> {
        Ok(self.get_lesson_plan(id).await?.into())
    }

    pub async fn list_lesson_plans(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<LessonPlan>, i64)> {
        self.repository.list(offset, limit).await
    }

    pub async fn list_by_author(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<LessonPlan>, i64)> {
        self.repository.list_by_author(user_id, offset, limit).await
    }
}
