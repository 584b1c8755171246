pub mod lesson_plan_repository;
pub mod quiz_result_repository;
pub mod user_repository;

pub use lesson_plan_repository::{LessonPlanRepository, MongoLessonPlanRepository};
pub use quiz_result_repository::{MongoQuizResultRepository, QuizResultRepository};
pub use user_repository::{MongoUserRepository, UserRepository};
