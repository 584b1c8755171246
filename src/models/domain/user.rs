use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Professor,
    #[default]
    Aluno,
}

impl User {
    pub fn new(
        name: &str,
        username: &str,
        email: &str,
        password_hash: &str,
        password_salt: &str,
        role: UserRole,
    ) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            password_salt: password_salt.to_string(),
            role,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            "Ana Souza",
            "anasouza",
            "ana@example.com",
            "hash",
            "salt",
            UserRole::Professor,
        );

        assert_eq!(user.username, "anasouza");
        assert_eq!(user.role, UserRole::Professor);
        assert!(user.created_at.is_some());
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Aluno).unwrap(), "\"aluno\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Professor).unwrap(),
            "\"professor\""
        );
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn test_default_role_is_aluno() {
        assert_eq!(UserRole::default(), UserRole::Aluno);
    }
}
