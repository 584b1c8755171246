use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizAnswer, QuizQuestion, QuizResult},
    models::dto::request::QuizAnswerInput,
    repositories::{LessonPlanRepository, QuizResultRepository},
};

pub struct QuizSubmissionService {
    lesson_plans: Arc<dyn LessonPlanRepository>,
    quiz_results: Arc<dyn QuizResultRepository>,
    allow_retakes: bool,
}

impl QuizSubmissionService {
    pub fn new(
        lesson_plans: Arc<dyn LessonPlanRepository>,
        quiz_results: Arc<dyn QuizResultRepository>,
        allow_retakes: bool,
    ) -> Self {
        Self {
            lesson_plans,
            quiz_results,
            allow_retakes,
        }
    }

    /// Validate a submission against the plan's question set, score it, and
    /// persist the result. The single repository write happens only after
    /// every precondition has passed.
    pub async fn submit(
        &self,
        lesson_plan_id: &str,
        user_id: &str,
        answers: &[QuizAnswerInput],
        time_spent: Option<i64>,
    ) -> AppResult<QuizResult> {
        if lesson_plan_id.trim().is_empty() {
            return Err(AppError::invalid_argument("lesson_plan_id must not be empty"));
        }
        if user_id.trim().is_empty() {
            return Err(AppError::invalid_argument("user_id must not be empty"));
        }
        if answers.is_empty() {
            return Err(AppError::invalid_argument(
                "a submission needs at least one answer",
            ));
        }

        let plan = self
            .lesson_plans
            .find_by_id(lesson_plan_id)
            .await?
            .ok_or_else(|| AppError::not_found("lesson plan", lesson_plan_id))?;

        let questions = plan.questions();
        if questions.is_empty() {
            return Err(AppError::invalid_state(format!(
                "lesson plan '{}' has no quiz to take",
                plan.id
            )));
        }

        if answers.len() != questions.len() {
            return Err(AppError::wrong_answer_count(questions.len(), answers.len()));
        }

        let question_map: HashMap<&str, &QuizQuestion> =
            questions.iter().map(|q| (q.id.as_str(), q)).collect();

        let mut answered: HashSet<&str> = HashSet::with_capacity(answers.len());
        let mut graded = Vec::with_capacity(answers.len());
        let mut correct_count: usize = 0;

        for answer in answers {
            let question = question_map
                .get(answer.question_id.as_str())
                .copied()
                .ok_or_else(|| AppError::not_found("quiz question", answer.question_id.clone()))?;

            // Count match alone would admit a duplicate plus an omission.
            if !answered.insert(question.id.as_str()) {
                return Err(AppError::invalid_argument(format!(
                    "question '{}' answered more than once",
                    question.id
                )));
            }

            let is_correct = answer.selected_answer == question.correct_answer;
            if is_correct {
                correct_count += 1;
            }

            graded.push(QuizAnswer {
                question_id: answer.question_id.clone(),
                selected_answer: answer.selected_answer,
                is_correct,
            });
        }

        if !self.allow_retakes
            && self
                .quiz_results
                .has_user_completed(lesson_plan_id, user_id)
                .await?
        {
            return Err(AppError::invalid_state(format!(
                "user '{}' already has a result for lesson plan '{}'",
                user_id, lesson_plan_id
            )));
        }

        let total_questions = questions.len();
        let now = Utc::now();

        let result = QuizResult {
            id: Uuid::new_v4().to_string(),
            lesson_plan_id: lesson_plan_id.to_string(),
            user_id: user_id.to_string(),
            answers: graded,
            score: Self::percentage(correct_count, total_questions),
            total_questions: total_questions as i16,
            correct_answers: correct_count as i16,
            completed_at: now,
            time_spent,
            ai_feedback: None,
            created_at: Some(now),
            modified_at: Some(now),
        };

        log::info!(
            "Scored submission for lesson plan '{}' by user '{}': {}/{}",
            lesson_plan_id,
            user_id,
            correct_count,
            total_questions
        );

        self.quiz_results.save(result).await
    }

    pub async fn get_result(&self, id: &str) -> AppResult<QuizResult> {
        self.quiz_results
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("quiz result", id))
    }

    pub async fn results_for_lesson_plan(&self, lesson_plan_id: &str) -> AppResult<Vec<QuizResult>> {
        self.quiz_results.find_by_lesson_plan(lesson_plan_id).await
    }

    pub async fn results_for_user(&self, user_id: &str) -> AppResult<Vec<QuizResult>> {
        self.quiz_results.find_by_user(user_id).await
    }

    /// Attach feedback produced by an external analysis step. Scoring fields
    /// are never touched here.
    pub async fn attach_feedback(&self, result_id: &str, feedback: &str) -> AppResult<QuizResult> {
        let mut result = self.get_result(result_id).await?;
        result.ai_feedback = Some(feedback.to_string());
        result.modified_at = Some(Utc::now());
        self.quiz_results.save(result).await
    }

    // Integer percentage rounding half up: 2 of 3 is 67, not 66.
    fn percentage(correct: usize, total: usize) -> i16 {
        ((correct as f64 / total as f64) * 100.0).round() as i16
    }
}
