use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_owner_or_admin, require_professor, AuthenticatedUser},
    errors::AppError,
    models::domain::UserRole,
    models::dto::request::{CreateLessonPlanRequest, LessonPlanFilter, PaginationParams},
    models::dto::response::{LessonPlanStudentDto, PageDto},
};

#[post("/api/lesson-plans")]
pub async fn create_lesson_plan(
    state: web::Data<AppState>,
    request: web::Json<CreateLessonPlanRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_professor(&auth.0)?;

    let plan = state
        .lesson_plan_service
        .create_lesson_plan(request.into_inner(), &auth.0.sub)
        .await?;
    Ok(HttpResponse::Created().json(plan))
}

#[get("/api/lesson-plans")]
pub async fn list_lesson_plans(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
    filter: web::Query<LessonPlanFilter>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    let (plans, total) = match filter.author.as_deref() {
        Some(author) => {
            state
                .lesson_plan_service
                .list_by_author(author, pagination.offset(), pagination.limit())
                .await?
        }
        None => {
            state
                .lesson_plan_service
                .list_lesson_plans(pagination.offset(), pagination.limit())
                .await?
        }
    };

    if auth.0.role == UserRole::Aluno {
        let items: Vec<LessonPlanStudentDto> =
            plans.into_iter().map(LessonPlanStudentDto::from).collect();
        return Ok(HttpResponse::Ok().json(PageDto { items, total }));
    }

    Ok(HttpResponse::Ok().json(PageDto { items: plans, total }))
}

#[put("/api/lesson-plans/{id}")]
pub async fn update_lesson_plan(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<CreateLessonPlanRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_professor(&auth.0)?;

    let existing = state.lesson_plan_service.get_lesson_plan(&id).await?;
    require_owner_or_admin(&auth.0, &existing.created_by_user_id)?;

    let plan = state
        .lesson_plan_service
        .update_lesson_plan(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(plan))
}

#[get("/api/lesson-plans/{id}")]
pub async fn get_lesson_plan(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    // Alunos get the projection without the answer key.
    if auth.0.role == UserRole::Aluno {
        let view = state
            .lesson_plan_service
            .get_lesson_plan_for_student(&id)
            .await?;
        return Ok(HttpResponse::Ok().json(view));
    }

    let plan = state.lesson_plan_service.get_lesson_plan(&id).await?;
    Ok(HttpResponse::Ok().json(plan))
}
