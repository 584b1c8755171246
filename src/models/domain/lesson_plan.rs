use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz_question::QuizQuestion;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LessonPlan {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub content: String,                     // lesson body shown to students
    pub created_by_user_id: String,          // professor who authored the plan
    pub quiz: Option<Vec<QuizQuestion>>,     // ordered; None or empty means no quiz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl LessonPlan {
    pub fn new(
        title: &str,
        subject: &str,
        content: &str,
        created_by_user_id: &str,
        quiz: Option<Vec<QuizQuestion>>,
    ) -> Self {
        LessonPlan {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            subject: subject.to_string(),
            content: content.to_string(),
            created_by_user_id: created_by_user_id.to_string(),
            quiz,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    /// Questions of the attached quiz, empty slice when there is none.
    pub fn questions(&self) -> &[QuizQuestion] {
        self.quiz.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_plan_without_quiz_has_no_questions() {
        let plan = LessonPlan::new("Fractions", "Math", "Halves and quarters", "prof-1", None);

        assert!(plan.questions().is_empty());
        assert!(plan.created_at.is_some());
        assert!(!plan.id.is_empty());
    }

    #[test]
    fn lesson_plan_questions_preserve_order() {
        let quiz = vec![
            QuizQuestion::new("First?", vec!["a".to_string(), "b".to_string()], 0),
            QuizQuestion::new("Second?", vec!["a".to_string(), "b".to_string()], 1),
        ];
        let plan = LessonPlan::new("Unit 1", "History", "Intro", "prof-1", Some(quiz));

        let prompts: Vec<_> = plan.questions().iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["First?", "Second?"]);
    }

    #[test]
    fn lesson_plan_round_trip_serialization() {
        let quiz = vec![QuizQuestion::new(
            "Capital of Brazil?",
            vec!["Rio".to_string(), "Brasília".to_string()],
            1,
        )];
        let plan = LessonPlan::new("Capitals", "Geography", "Capitals lesson", "prof-2", Some(quiz));

        let json = serde_json::to_string(&plan).expect("plan should serialize");
        let parsed: LessonPlan = serde_json::from_str(&json).expect("plan should deserialize");

        assert_eq!(plan, parsed);
        assert_eq!(parsed.questions().len(), 1);
    }
}
