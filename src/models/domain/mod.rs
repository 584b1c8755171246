pub mod lesson_plan;
pub mod quiz_question;
pub mod quiz_result;
pub mod user;
pub use lesson_plan::LessonPlan;
pub use quiz_question::QuizQuestion;
pub use quiz_result::{QuizAnswer, QuizResult};
pub use user::{User, UserRole};
