use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{LessonPlan, User, UserRole};

#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub refresh_token: String,
    pub user: UserDto,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub token: String,
    pub refresh_token: String,
}

/// Lesson plan as served to alunos: quiz questions without the answer key.
#[derive(Debug, Clone, Serialize)]
pub struct LessonPlanStudentDto {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub content: String,
    pub quiz: Vec<StudentQuizQuestionDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentQuizQuestionDto {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

impl From<LessonPlan> for LessonPlanStudentDto {
    fn from(plan: LessonPlan) -> Self {
        let quiz = plan
            .quiz
            .unwrap_or_default()
            .into_iter()
            .map(|q| StudentQuizQuestionDto {
                id: q.id,
                prompt: q.prompt,
                options: q.options,
            })
            .collect();

        LessonPlanStudentDto {
            id: plan.id,
            title: plan.title,
            subject: plan.subject,
            content: plan.content,
            quiz,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageDto<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
}
