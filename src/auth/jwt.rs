use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::{Claims, RefreshClaims},
    errors::{AppError, AppResult},
    models::domain::user::User,
};

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
    refresh_expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64, refresh_expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            expiration_hours,
            refresh_expiration_hours,
        }
    }

    pub fn create_token(&self, user: &User) -> AppResult<String> {
        let claims = Claims::new(user, self.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }

    pub fn create_refresh_token(&self, user_id: &str) -> AppResult<String> {
        let claims = RefreshClaims::new(user_id, self.refresh_expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create refresh token: {}", e)))
    }

    pub fn validate_refresh_token(&self, token: &str) -> AppResult<RefreshClaims> {
        let token_data = decode::<RefreshClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Refresh token has expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::Unauthorized("Invalid refresh token format".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::Unauthorized("Refresh token signature is invalid".to_string())
                }
                _ => AppError::Unauthorized(format!("Refresh token validation failed: {}", e)),
            })?;

        if token_data.claims.token_type != "refresh" {
            return Err(AppError::Unauthorized(
                "Token is not a refresh token".to_string(),
            ));
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::domain::UserRole;

    fn test_user() -> User {
        User::new(
            "Ana Souza",
            "anasouza",
            "ana@example.com",
            "hash",
            "salt",
            UserRole::Professor,
        )
    }

    #[test]
    fn test_jwt_create_and_validate() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, 1, 168);

        let user = test_user();
        let token = jwt_service.create_token(&user).unwrap();

        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "anasouza");
        assert_eq!(claims.role, UserRole::Professor);
    }

    #[test]
    fn test_jwt_invalid_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, 1, 168);

        let result = jwt_service.validate_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_refresh_token_create_and_validate() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, 1, 168);

        let refresh_token = jwt_service.create_refresh_token("user-1").unwrap();
        assert!(!refresh_token.is_empty());

        let claims = jwt_service.validate_refresh_token(&refresh_token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.token_type, "refresh");
    }

    #[test]
    fn test_access_token_is_not_a_refresh_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, 1, 168);

        let token = jwt_service.create_token(&test_user()).unwrap();
        let result = jwt_service.validate_refresh_token(&token);
        assert!(result.is_err());
    }
}
