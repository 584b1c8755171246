use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub id: String,
    pub lesson_plan_id: String,
    pub user_id: String,
    pub answers: Vec<QuizAnswer>, // input order of the submission
    pub score: i16,               // 0-100
    pub total_questions: i16,
    pub correct_answers: i16,
    pub completed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<i64>, // seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAnswer {
    pub question_id: String,
    pub selected_answer: i16, // index into the question's options
    pub is_correct: bool,
}
