pub mod lesson_plan_service;
pub mod quiz_submission_service;
pub mod user_service;

pub use lesson_plan_service::LessonPlanService;
pub use quiz_submission_service::QuizSubmissionService;
pub use user_service::UserService;
