use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum_helpers::{JwtAuth, JwtClaims};
use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{AuthPayload, LoginRequest, RegisterRequest, User};
use crate::repository::UserRepository;

/// Registration, credential checks and token lifecycle
#[derive(Clone)]
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    auth: JwtAuth,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repository: R, auth: JwtAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            auth,
        }
    }

    /// Creates the account and logs it in.
    pub async fn register(&self, input: RegisterRequest) -> UserResult<AuthPayload> {
        input.validate()?;
        let email = input.email.unwrap_or_default();
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken);
        }

        let password_hash = hash_password(&input.password.unwrap_or_default())?;
        let user = User::new(input.name.unwrap_or_default(), email, password_hash);
        let user = self.repository.create(user).await?;

        self.payload(user).await
    }

    pub async fn login(&self, input: LoginRequest) -> UserResult<AuthPayload> {
        input.validate()?;
        let email = input.email.unwrap_or_default();
        let password = input.password.unwrap_or_default();

        let Some(user) = self.repository.find_by_email(&email).await? else {
            tracing::debug!("Login attempt for unknown email");
            return Err(UserError::InvalidCredentials);
        };
        if !verify_password(&password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        self.payload(user).await
    }

    /// Revokes the token the request was authenticated with.
    pub async fn logout(&self, claims: &JwtClaims) -> UserResult<()> {
        self.auth
            .revoke(claims.jti)
            .await
            .map_err(UserError::Token)?;
        tracing::info!(user_id = %claims.sub, "User logged out");
        Ok(())
    }

    pub async fn me(&self, claims: &JwtClaims) -> UserResult<User> {
        self.repository
            .find_by_id(claims.sub)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn payload(&self, user: User) -> UserResult<AuthPayload> {
        let issued = self
            .auth
            .issue(user.id, &user.email, &user.name)
            .await
            .map_err(UserError::Token)?;
        Ok(AuthPayload {
            user,
            token: issued.token,
        })
    }
}

fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> UserResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
