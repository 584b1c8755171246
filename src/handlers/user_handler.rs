use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::domain::UserRole,
    models::dto::request::{CreateUserRequest, PaginationParams},
};

/// Admin-provisioned accounts; the only path to professor and admin roles.
#[post("/api/users")]
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let user = state.user_service.create_user(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[get("/api/users/{username}")]
pub async fn get_user(
    state: web::Data<AppState>,
    username: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    if auth.0.role != UserRole::Admin && auth.0.username != *username {
        return Err(AppError::Unauthorized(
            "You can only access your own resources".to_string(),
        ));
    }

    let user = state.user_service.get_user(&username).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/api/users")]
pub async fn get_all_users(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let pagination = query.into_inner();
    let response = state
        .user_service
        .get_all_users_paginated(pagination.offset(), pagination.limit())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.db.health_check().await;

    let status = if db_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
