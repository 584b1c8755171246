use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{generate_salt, hash_password, verify_password},
    errors::{AppError, AppResult},
    models::domain::User,
    models::dto::request::CreateUserRequest,
    models::dto::response::{PageDto, UserDto},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserDto> {
        request.validate()?;

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "User with username '{}' already exists",
                request.username
            )));
        }

        let salt = generate_salt();
        let hash = hash_password(&request.password, &salt);
        let user = User::new(
            &request.name,
            &request.username,
            &request.email,
            &hash,
            &salt,
            request.role,
        );

        log::info!("Creating user '{}' with role {:?}", user.username, user.role);
        let created = self.repository.create(user).await?;
        Ok(created.into())
    }

    pub async fn get_user(&self, username: &str) -> AppResult<UserDto> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("user", username))?;
        Ok(user.into())
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user", id))
    }

    pub async fn get_all_users_paginated(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<PageDto<UserDto>> {
        let (users, total) = self.repository.find_all_paginated(offset, limit).await?;
        Ok(PageDto {
            items: users.into_iter().map(UserDto::from).collect(),
            total,
        })
    }

    /// Credential check for login. Unknown usernames and bad passwords get the
    /// same answer.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

        if !verify_password(password, &user.password_salt, &user.password_hash) {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::UserRole;
    use crate::repositories::user_repository::MockUserRepository;
    use mockall::predicate::eq;

    fn create_request(username: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: "Ana Souza".to_string(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: "segredo123".to_string(),
            role: UserRole::Aluno,
        }
    }

    #[tokio::test]
    async fn create_user_hashes_password() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_username()
            .with(eq("anasouza"))
            .returning(|_| Ok(None));
        repository.expect_create().returning(|user| {
            assert_ne!(user.password_hash, "segredo123");
            assert!(!user.password_salt.is_empty());
            Ok(user)
        });

        let service = UserService::new(Arc::new(repository));

        let dto = service
            .create_user(create_request("anasouza"))
            .await
            .expect("create should succeed");
        assert_eq!(dto.username, "anasouza");
    }

    #[tokio::test]
    async fn create_user_rejects_duplicate_username() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_username().returning(|_| {
            Ok(Some(User::new(
                "Ana Souza",
                "anasouza",
                "ana@example.com",
                "hash",
                "salt",
                UserRole::Aluno,
            )))
        });

        let service = UserService::new(Arc::new(repository));

        let result = service.create_user(create_request("anasouza")).await;
        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn authenticate_accepts_correct_password() {
        let salt = generate_salt();
        let hash = hash_password("segredo123", &salt);
        let user = User::new(
            "Ana Souza",
            "anasouza",
            "ana@example.com",
            &hash,
            &salt,
            UserRole::Aluno,
        );

        let mut repository = MockUserRepository::new();
        let stored = user.clone();
        repository
            .expect_find_by_username()
            .returning(move |_| Ok(Some(stored.clone())));

        let service = UserService::new(Arc::new(repository));

        let authenticated = service
            .authenticate("anasouza", "segredo123")
            .await
            .expect("login should succeed");
        assert_eq!(authenticated.id, user.id);
    }

    #[tokio::test]
    async fn authenticate_rejects_bad_password_and_unknown_user() {
        let salt = generate_salt();
        let hash = hash_password("segredo123", &salt);

        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_username()
            .with(eq("anasouza"))
            .returning(move |_| {
                Ok(Some(User::new(
                    "Ana Souza",
                    "anasouza",
                    "ana@example.com",
                    &hash,
                    &salt,
                    UserRole::Aluno,
                )))
            });
        repository
            .expect_find_by_username()
            .with(eq("ghost"))
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let bad_password = service.authenticate("anasouza", "wrong").await;
        assert!(matches!(bad_password, Err(AppError::Unauthorized(_))));

        let unknown = service.authenticate("ghost", "segredo123").await;
        assert!(matches!(unknown, Err(AppError::Unauthorized(_))));
    }
}
