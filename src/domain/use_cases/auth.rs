use std::sync::Arc;

use validator::Validate;

use crate::auth::jwt::JwtService;
use crate::auth::password::{hash_password, verify_password};
use crate::entities::admin::{AdminCredential, AdminProfile, ChangePasswordRequest, LoginRequest};
use crate::entities::token::{Claims, LoginResponse};
use crate::errors::{AppError, AuthError};
use crate::interfaces::repositories::admin::AdminRepository;
use crate::settings::AppConfig;

/// The authentication gate. One configured email is allowed through;
/// everything else fails before the credential store is ever consulted.
pub struct AuthHandler {
    pub admin_repo: Arc<dyn AdminRepository>,
    pub token_service: JwtService,
    admin_email: String,
    bootstrap_password: Option<String>,
}

impl AuthHandler {
    pub fn new(admin_repo: Arc<dyn AdminRepository>, token_service: JwtService, config: &AppConfig) -> Self {
        AuthHandler {
            admin_repo,
            token_service,
            admin_email: config.admin_email.clone(),
            bootstrap_password: config.admin_bootstrap_password.clone(),
        }
    }

    /// Validates credentials and issues a signed token on success.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthError> {
        request.validate()?;

        if request.email != self.admin_email {
            // Unknown identity; the store is not touched.
            return Err(AuthError::WrongCredentials);
        }

        let admin = match self.admin_repo.find_by_email(&request.email)
            .await
            .map_err(|_| AuthError::AuthenticationFailed)?
        {
            Some(admin) => admin,
            None => self.bootstrap_admin().await?,
        };

        let is_password_valid = verify_password(&request.password, &admin.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let token = self.token_service.create_token(&admin)
            .map_err(|e| {
                tracing::warn!("Failed to create JWT: {}", e);
                AuthError::TokenCreation
            })?;

        tracing::info!("Admin logged in successfully");
        Ok(LoginResponse {
            token,
            admin: AdminProfile { email: admin.email },
        })
    }

    /// Provisions the credential record on first login, when a bootstrap
    /// password is configured. Subsequent logins find the existing record.
    async fn bootstrap_admin(&self) -> Result<AdminCredential, AuthError> {
        let Some(bootstrap_password) = &self.bootstrap_password else {
            return Err(AuthError::WrongCredentials);
        };

        let password_hash = hash_password(bootstrap_password)?;
        let admin = AdminCredential::new(self.admin_email.clone(), password_hash);

        self.admin_repo.insert(&admin)
            .await
            .map_err(|_| AuthError::AuthenticationFailed)?;

        tracing::info!("Provisioned admin credential record on first login");
        Ok(admin)
    }

    /// Rotates the admin password after re-verifying the current one.
    pub async fn change_password(&self, claims: &Claims, request: ChangePasswordRequest) -> Result<(), AppError> {
        request.validate()?;

        let admin = self.admin_repo.find_by_email(&claims.email)
            .await?
            .ok_or(AppError::UnauthorizedAccess)?;

        let is_current_valid = verify_password(&request.current_password, &admin.password_hash)
            .map_err(AppError::from)?;
        if !is_current_valid {
            return Err(AppError::UnauthorizedAccess);
        }

        let new_hash = hash_password(&request.new_password)?;
        self.admin_repo.update_password_hash(&admin.id, &new_hash).await?;

        tracing::info!("Admin password rotated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppEnvironment;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        AdminRepo {}

        #[async_trait::async_trait]
        impl AdminRepository for AdminRepo {
            async fn check_connection(&self) -> Result<(), AppError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<AdminCredential>, AppError>;
            async fn insert(&self, admin: &AdminCredential) -> Result<(), AppError>;
            async fn update_password_hash(&self, id: &Uuid, password_hash: &str) -> Result<(), AppError>;
        }
    }

    fn test_config(bootstrap: Option<&str>) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "mongodb://localhost:27017".into(),
            database_name: "test".into(),
            cors_allowed_origins: vec!["*".into()],
            jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".into(),
            jwt_expiration_hours: 1,
            admin_email: "admin@example.com".into(),
            admin_bootstrap_password: bootstrap.map(String::from),
        }
    }

    fn handler(repo: MockAdminRepo, bootstrap: Option<&str>) -> AuthHandler {
        let config = test_config(bootstrap);
        AuthHandler::new(Arc::new(repo), JwtService::new(&config), &config)
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn unknown_email_fails_without_touching_the_store() {
        // No expectations set: any repository call would panic the test.
        let repo = MockAdminRepo::new();
        let handler = handler(repo, None);

        let result = handler.login(login_request("intruder@example.com", "whatever")).await;

        assert!(matches!(result, Err(AuthError::WrongCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let mut repo = MockAdminRepo::new();
        let hash = hash_password("RealPass123!").unwrap();
        repo.expect_find_by_email()
            .returning(move |email| Ok(Some(AdminCredential::new(email.into(), hash.clone()))));

        let handler = handler(repo, None);

        let result = handler.login(login_request("admin@example.com", "WrongPass123!")).await;

        assert!(matches!(result, Err(AuthError::WrongCredentials)));
    }

    #[tokio::test]
    async fn correct_password_yields_decodable_token() {
        let mut repo = MockAdminRepo::new();
        let hash = hash_password("RealPass123!").unwrap();
        repo.expect_find_by_email()
            .returning(move |email| Ok(Some(AdminCredential::new(email.into(), hash.clone()))));

        let handler = handler(repo, None);

        let response = handler.login(login_request("admin@example.com", "RealPass123!"))
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.admin.email, "admin@example.com");

        let claims = handler.token_service.decode_token(&response.token).unwrap().claims;
        assert_eq!(claims.email, "admin@example.com");
    }

    #[tokio::test]
    async fn missing_record_is_bootstrapped_exactly_once() {
        let mut repo = MockAdminRepo::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_insert().times(1).returning(|_| Ok(()));

        let handler = handler(repo, Some("Bootstrap9!"));

        let response = handler.login(login_request("admin@example.com", "Bootstrap9!"))
            .await
            .unwrap();

        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn missing_record_without_bootstrap_policy_is_rejected() {
        let mut repo = MockAdminRepo::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let handler = handler(repo, None);

        let result = handler.login(login_request("admin@example.com", "anything")).await;

        assert!(matches!(result, Err(AuthError::WrongCredentials)));
    }

    #[tokio::test]
    async fn change_password_requires_the_current_one() {
        let mut repo = MockAdminRepo::new();
        let hash = hash_password("OldPass123!").unwrap();
        repo.expect_find_by_email()
            .returning(move |email| Ok(Some(AdminCredential::new(email.into(), hash.clone()))));

        let handler = handler(repo, None);
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "admin@example.com".into(),
            exp: 0,
            iat: 0,
        };

        let result = handler.change_password(&claims, ChangePasswordRequest {
            current_password: "NotTheOldOne!".into(),
            new_password: "BrandNewPass1!".into(),
        }).await;

        assert!(matches!(result, Err(AppError::UnauthorizedAccess)));
    }

    #[tokio::test]
    async fn change_password_stores_a_new_hash() {
        let mut repo = MockAdminRepo::new();
        let hash = hash_password("OldPass123!").unwrap();
        repo.expect_find_by_email()
            .returning(move |email| Ok(Some(AdminCredential::new(email.into(), hash.clone()))));
        repo.expect_update_password_hash()
            .times(1)
            .returning(|_, _| Ok(()));

        let handler = handler(repo, None);
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "admin@example.com".into(),
            exp: 0,
            iat: 0,
        };

        let result = handler.change_password(&claims, ChangePasswordRequest {
            current_password: "OldPass123!".into(),
            new_password: "BrandNewPass1!".into(),
        }).await;

        assert!(result.is_ok());
    }
}
