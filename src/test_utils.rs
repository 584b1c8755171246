use crate::models::domain::{LessonPlan, QuizQuestion, User, UserRole};



#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::UserRole;

    #[test]
    fn test_fixtures_test_aluno() {
        let user = test_aluno("joao");
        assert_eq!(user.username, "joao");
        assert_eq!(user.email, "joao@example.com");
        assert_eq!(user.role, UserRole::Aluno);
    }

    #[test]
    fn test_fixtures_test_professor() {
        let user = test_professor("ana");
        assert_eq!(user.role, UserRole::Professor);
    }

    #[test]
    fn test_fixtures_lesson_plan_with_quiz() {
        let plan = test_lesson_plan_with_quiz("prof-1");
        assert_eq!(plan.questions().len(), 3);
        assert_eq!(plan.questions()[0].correct_answer, 1);
        assert_eq!(plan.created_by_user_id, "prof-1");
    }
}
