use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::user::UserRole,
};

pub fn require_admin(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Admin {
        return Err(AppError::Unauthorized(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

/// Professors and admins share the teaching surface.
pub fn require_professor(claims: &Claims) -> AppResult<()> {
    if claims.role != UserRole::Professor && claims.role != UserRole::Admin {
        return Err(AppError::Unauthorized(
            "Only professors can perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn require_owner_or_admin(claims: &Claims, resource_owner: &str) -> AppResult<()> {
    if claims.role != UserRole::Admin && claims.sub != resource_owner {
        return Err(AppError::Unauthorized(
            "You can only access your own resources".to_string(),
        ));
    }
    Ok(())
}

/// A result is visible to its owner and to the teaching staff.
pub fn can_view_quiz_result(claims: &Claims, owner_id: &str) -> AppResult<()> {
    if claims.role == UserRole::Aluno && claims.sub != owner_id {
        return Err(AppError::Unauthorized(
            "You can only view your own quiz results".to_string(),
        ));
    }
    Ok(())
}

pub fn generate_salt() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn verify_password(password: &str, salt: &str, expected_hash: &str) -> bool {
    hash_password(password, salt) == expected_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_claims(user_id: &str, role: UserRole) -> Claims {
        Claims {
            sub: user_id.to_string(),
            username: format!("user_{}", user_id),
            role,
            iat: 0,
            exp: 9999999999,
        }
    }

    #[test]
    fn test_require_admin_success() {
        let claims = create_test_claims("admin", UserRole::Admin);
        assert!(require_admin(&claims).is_ok());
    }

    #[test]
    fn test_require_admin_failure() {
        let claims = create_test_claims("aluno", UserRole::Aluno);
        assert!(require_admin(&claims).is_err());
    }

    #[test]
    fn test_require_professor_accepts_admin() {
        let claims = create_test_claims("admin", UserRole::Admin);
        assert!(require_professor(&claims).is_ok());
    }

    #[test]
    fn test_require_professor_rejects_aluno() {
        let claims = create_test_claims("aluno", UserRole::Aluno);
        assert!(require_professor(&claims).is_err());
    }

    #[test]
    fn test_require_owner_or_admin_as_owner() {
        let claims = create_test_claims("user-1", UserRole::Aluno);
        assert!(require_owner_or_admin(&claims, "user-1").is_ok());
    }

    #[test]
    fn test_require_owner_or_admin_as_admin() {
        let claims = create_test_claims("admin", UserRole::Admin);
        assert!(require_owner_or_admin(&claims, "someone-else").is_ok());
    }

    #[test]
    fn test_require_owner_or_admin_failure() {
        let claims = create_test_claims("user-1", UserRole::Professor);
        assert!(require_owner_or_admin(&claims, "user-2").is_err());
    }

    #[test]
    fn test_can_view_quiz_result() {
        let owner = create_test_claims("user-1", UserRole::Aluno);
        assert!(can_view_quiz_result(&owner, "user-1").is_ok());
        assert!(can_view_quiz_result(&owner, "user-2").is_err());

        let professor = create_test_claims("prof-1", UserRole::Professor);
        assert!(can_view_quiz_result(&professor, "user-2").is_ok());
    }

    #[test]
    fn test_password_hash_round_trip() {
        let salt = generate_salt();
        let hash = hash_password("segredo123", &salt);

        assert!(verify_password("segredo123", &salt, &hash));
        assert!(!verify_password("wrong", &salt, &hash));
    }

    #[test]
    fn test_same_password_different_salts_differ() {
        let hash_a = hash_password("segredo123", &generate_salt());
        let hash_b = hash_password("segredo123", &generate_salt());
        assert_ne!(hash_a, hash_b);
    }
}
