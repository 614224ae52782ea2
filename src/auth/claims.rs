use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Many(Vec<String>),
}

impl Audience {
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Audience::Single(aud) => aud == audience,
            Audience::Many(auds) => auds.iter().any(|aud| aud == audience),
        }
    }
}

/// Decoded payload of a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|perms| perms.iter().any(|p| p == permission))
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    pub fn subject(&self) -> &str {
        self.sub.as_deref().unwrap_or("<anonymous>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize_auth0_payload() {
        let payload = serde_json::json!({
            "iss": "https://test-tenant.auth0.com/",
            "sub": "auth0|barista",
            "aud": ["coffee-shop", "https://test-tenant.auth0.com/userinfo"],
            "iat": 1_700_000_000,
            "exp": 1_700_086_400,
            "azp": "client-id",
            "permissions": ["get:drinks-detail"]
        });

        let claims: Claims = serde_json::from_value(payload).unwrap();

        assert_eq!(claims.subject(), "auth0|barista");
        assert!(claims.aud.as_ref().unwrap().contains("coffee-shop"));
        assert!(claims.has_permission("get:drinks-detail"));
        assert!(!claims.has_permission("post:drinks"));
        assert_eq!(claims.expires_at().unwrap().timestamp(), 1_700_086_400);
    }

    #[test]
    fn test_claims_without_permissions() {
        let payload = serde_json::json!({
            "iss": "https://test-tenant.auth0.com/",
            "aud": "coffee-shop",
            "exp": 1_700_086_400
        });

        let claims: Claims = serde_json::from_value(payload).unwrap();

        assert!(claims.permissions.is_none());
        assert!(!claims.has_permission("get:drinks-detail"));
        assert_eq!(claims.aud, Some(Audience::Single("coffee-shop".to_string())));
    }
}
