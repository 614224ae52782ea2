use std::{env, time::Duration};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

const DEFAULT_AUTH0_DOMAIN: &str = "example.auth0.com";
const DEFAULT_API_AUDIENCE: &str = "coffee-shop";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub auth0_domain: String,
    pub api_audience: String,
    pub jwks_url: Option<String>,
    pub jwks_cache_ttl_secs: u64,
    pub jwks_fetch_timeout_secs: u64,
    pub jwks_min_refresh_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "trivia-cafe".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            auth0_domain: env::var("AUTH0_DOMAIN")
                .unwrap_or_else(|_| DEFAULT_AUTH0_DOMAIN.to_string()),
            api_audience: env::var("API_AUDIENCE")
                .unwrap_or_else(|_| DEFAULT_API_AUDIENCE.to_string()),
            jwks_url: env::var("JWKS_URL").ok().filter(|url| !url.is_empty()),
            jwks_cache_ttl_secs: env::var("JWKS_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(600),
            jwks_fetch_timeout_secs: env::var("JWKS_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            jwks_min_refresh_secs: env::var("JWKS_MIN_REFRESH_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Token issuer, as Auth0 writes it into `iss`.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.auth0_domain)
    }

    pub fn jwks_url(&self) -> String {
        self.jwks_url
            .clone()
            .unwrap_or_else(|| format!("https://{}/.well-known/jwks.json", self.auth0_domain))
    }

    pub fn jwks_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.jwks_cache_ttl_secs)
    }

    pub fn jwks_fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.jwks_fetch_timeout_secs)
    }

    /// Shortest gap between two key-set fetches triggered by unknown `kid`s.
    pub fn jwks_min_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.jwks_min_refresh_secs)
    }

    /// Rejects placeholder auth settings that would make every token fail.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if self.auth0_domain == DEFAULT_AUTH0_DOMAIN {
            return Err(AppError::InternalError(
                "AUTH0_DOMAIN is using its default value. Set AUTH0_DOMAIN to your tenant domain."
                    .to_string(),
            ));
        }

        if self.api_audience.trim().is_empty() {
            return Err(AppError::InternalError(
                "API_AUDIENCE must not be empty.".to_string(),
            ));
        }

        if self.jwks_fetch_timeout_secs == 0 {
            return Err(AppError::InternalError(
                "JWKS_FETCH_TIMEOUT_SECS must be greater than zero.".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "trivia-cafe-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            auth0_domain: "test-tenant.auth0.com".to_string(),
            api_audience: "coffee-shop".to_string(),
            jwks_url: None,
            jwks_cache_ttl_secs: 600,
            jwks_fetch_timeout_secs: 5,
            jwks_min_refresh_secs: 30,
        }
    }
}
