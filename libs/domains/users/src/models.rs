use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An account allowed to use the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, never serialized
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(required, length(max = 255))]
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[validate(required, email, length(max = 255))]
    #[schema(example = "john@example.com")]
    pub email: Option<String>,
    #[validate(required, length(min = 8))]
    #[schema(example = "secret123", format = Password)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(required, email)]
    #[schema(example = "john@example.com")]
    pub email: Option<String>,
    #[validate(required)]
    #[schema(example = "secret123", format = Password)]
    pub password: Option<String>,
}

/// Returned by register and login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthPayload {
    pub user: User,
    /// Bearer token for the `Authorization` header
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new("Jane".into(), "jane@example.com".into(), "$argon2id$x".into());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "jane@example.com");
    }

    #[test]
    fn test_register_requires_every_field() {
        let errors = RegisterRequest::default().validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_short_password_is_rejected() {
        let request = RegisterRequest {
            name: Some("John".into()),
            email: Some("john@example.com".into()),
            password: Some("short".into()),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_login_rejects_malformed_email() {
        let request = LoginRequest {
            email: Some("not-an-email".into()),
            password: Some("whatever".into()),
        };

        assert!(request.validate().unwrap_err().field_errors().contains_key("email"));
    }
}
