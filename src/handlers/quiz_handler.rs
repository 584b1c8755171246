use actix_web::{get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{can_view_quiz_result, require_owner_or_admin, require_professor, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{AttachFeedbackRequest, SubmitQuizRequest},
};

#[post("/api/lesson-plans/{id}/submissions")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let result = state
        .quiz_submission_service
        .submit(&id, &auth.0.sub, &request.answers, request.time_spent)
        .await?;
    Ok(HttpResponse::Created().json(result))
}

#[get("/api/quiz-results/{id}")]
pub async fn get_quiz_result(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state.quiz_submission_service.get_result(&id).await?;
    can_view_quiz_result(&auth.0, &result.user_id)?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/api/lesson-plans/{id}/results")]
pub async fn get_lesson_plan_results(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_professor(&auth.0)?;

    let results = state
        .quiz_submission_service
        .results_for_lesson_plan(&id)
        .await?;
    Ok(HttpResponse::Ok().json(results))
}

#[get("/api/users/{user_id}/results")]
pub async fn get_user_results(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_owner_or_admin(&auth.0, &user_id)?;

    let results = state.quiz_submission_service.results_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[put("/api/quiz-results/{id}/feedback")]
pub async fn attach_feedback(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<AttachFeedbackRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_professor(&auth.0)?;

    let request = request.into_inner();
    request.validate()?;

    let result = state
        .quiz_submission_service
        .attach_feedback(&id, &request.feedback)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
