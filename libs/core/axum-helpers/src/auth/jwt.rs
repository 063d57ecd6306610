use super::config::JwtConfig;
use super::store::{TokenRecord, TokenStore};
use chrono::{DateTime, Duration, Utc};
use eyre::WrapErr;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    pub exp: i64,
    pub iat: i64,
    /// Key in the [`TokenStore`].
    pub jti: Uuid,
}

/// A freshly signed token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: JwtClaims,
    pub expires_at: DateTime<Utc>,
}

/// Signed JWTs whose `jti` must also be registered in a [`TokenStore`].
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
    ttl_seconds: i64,
    store: Arc<dyn TokenStore>,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig, store: Arc<dyn TokenStore>) -> Self {
        tracing::info!(ttl_seconds = config.ttl_seconds, "JWT auth initialized");
        Self {
            secret: config.secret.clone(),
            ttl_seconds: config.ttl_seconds,
            store,
        }
    }

    /// Signs a token for the user and registers it in the store.
    pub async fn issue(&self, user_id: Uuid, email: &str, name: &str) -> eyre::Result<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.ttl_seconds);
        let claims = JwtClaims {
            sub: user_id,
            email: email.to_string(),
            name: name.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::now_v7(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };
        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .wrap_err("Failed to sign token")?;

        self.store
            .save(TokenRecord {
                jti: claims.jti,
                user_id,
                expires_at,
            })
            .await
            .wrap_err("Failed to register token")?;

        Ok(IssuedToken {
            token,
            claims,
            expires_at,
        })
    }

    /// Checks signature and expiry only.
    pub fn decode(&self, token: &str) -> eyre::Result<JwtClaims> {
        let data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }

    /// Full verification: signature, expiry and presence in the store.
    pub async fn verify(&self, token: &str) -> Result<JwtClaims, VerifyError> {
        let claims = self.decode(token).map_err(VerifyError::Invalid)?;
        match self.store.is_active(claims.jti).await {
            Ok(true) => Ok(claims),
            Ok(false) => Err(VerifyError::Revoked),
            Err(e) => Err(VerifyError::Store(e)),
        }
    }

    pub async fn revoke(&self, jti: Uuid) -> eyre::Result<()> {
        self.store.revoke(jti).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("invalid token: {0}")]
    Invalid(eyre::Report),
    #[error("token is not active")]
    Revoked,
    #[error("token store unavailable: {0}")]
    Store(eyre::Report),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::InMemoryTokenStore;

    fn auth() -> JwtAuth {
        let config = JwtConfig::new("this-is-a-valid-secret-with-32-chars!").unwrap();
        JwtAuth::new(&config, Arc::new(InMemoryTokenStore::new()))
    }

    #[tokio::test]
    async fn test_issue_then_verify() {
        let auth = auth();
        let user_id = Uuid::now_v7();
        let issued = auth
            .issue(user_id, "john@example.com", "John Doe")
            .await
            .unwrap();

        assert!(!issued.token.is_empty());
        let claims = auth.verify(&issued.token).await.unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "john@example.com");
        assert_eq!(claims, issued.claims);
    }

    #[tokio::test]
    async fn test_revoked_token_is_rejected() {
        let auth = auth();
        let issued = auth.issue(Uuid::now_v7(), "a@b.c", "A").await.unwrap();
        auth.revoke(issued.claims.jti).await.unwrap();

        assert!(matches!(
            auth.verify(&issued.token).await,
            Err(VerifyError::Revoked)
        ));
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_invalid() {
        let issued = auth().issue(Uuid::now_v7(), "a@b.c", "A").await.unwrap();
        let other = JwtAuth::new(
            &JwtConfig::new("another-secret-that-is-also-32-chars-long").unwrap(),
            Arc::new(InMemoryTokenStore::new()),
        );

        assert!(matches!(
            other.verify(&issued.token).await,
            Err(VerifyError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_garbage_is_invalid() {
        assert!(matches!(
            auth().verify("not-a-jwt").await,
            Err(VerifyError::Invalid(_))
        ));
    }
}
