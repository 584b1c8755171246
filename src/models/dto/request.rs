use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::user::UserRole;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]+$").expect("USERNAME_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 3, max = 50))]
    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "Username must be alphanumeric with underscores"
    ))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,

    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLessonPlanRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 100))]
    pub subject: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[validate(nested)]
    pub quiz: Option<Vec<QuizQuestionInput>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizQuestionInput {
    #[validate(length(min = 1, max = 500))]
    pub prompt: String,

    #[validate(length(min = 2, message = "A question needs at least two options"))]
    pub options: Vec<String>,

    pub correct_answer: i16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: Vec<QuizAnswerInput>,
    #[serde(default)]
    pub time_spent: Option<i64>, // seconds
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizAnswerInput {
    pub question_id: String,
    pub selected_answer: i16,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttachFeedbackRequest {
    #[validate(length(min = 1, max = 10000))]
    pub feedback: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LessonPlanFilter {
    pub author: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}
