use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::domain::UserRole,
    models::dto::request::{CreateUserRequest, LoginRequest, RefreshTokenRequest},
    models::dto::response::{AuthResponse, RefreshTokenResponse},
};

#[post("/api/auth/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let mut request = request.into_inner();
    // Self-registration is for students; staff accounts are provisioned by an admin.
    request.role = UserRole::Aluno;

    let user = state.user_service.create_user(request).await?;
    Ok(HttpResponse::Created().json(user))
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let user = state
        .user_service
        .authenticate(&request.username, &request.password)
        .await?;

    let token = state.jwt_service.create_token(&user)?;
    let refresh = state.jwt_service.create_refresh_token(&user.id)?;

    log::info!("User '{}' logged in", user.username);

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        refresh_token: refresh,
        user: user.into(),
    }))
}

#[post("/api/auth/refresh")]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    let refresh_claims = state
        .jwt_service
        .validate_refresh_token(&request.refresh_token)?;

    let user = state
        .user_service
        .get_user_by_id(&refresh_claims.sub)
        .await
        .map_err(|_| {
            AppError::Unauthorized("User associated with refresh token not found".to_string())
        })?;

    let token = state.jwt_service.create_token(&user)?;
    let new_refresh_token = state.jwt_service.create_refresh_token(&user.id)?;

    log::info!("Token refreshed for user '{}'", user.username);

    Ok(HttpResponse::Ok().json(RefreshTokenResponse {
        token,
        refresh_token: new_refresh_token,
    }))
}
