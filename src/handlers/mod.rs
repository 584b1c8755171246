pub mod auth_handler;
pub mod lesson_plan_handler;
pub mod quiz_handler;
pub mod user_handler;

pub use auth_handler::{login, refresh_token, register};
pub use lesson_plan_handler::{
    create_lesson_plan, get_lesson_plan, list_lesson_plans, update_lesson_plan,
};
pub use quiz_handler::{
    attach_feedback, get_lesson_plan_results, get_quiz_result, get_user_results, submit_quiz,
};
pub use user_handler::{create_user, get_all_users, get_user, health_check, health_check_live, health_check_ready};
