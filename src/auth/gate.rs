use std::sync::Arc;

use crate::{
    auth::{
        claims::Claims,
        error::AuthError,
        jwks::{HttpKeySetSource, JwksCache, KeySetSource},
        jwt::TokenVerifier,
        utils::{check_permission, extract_bearer_token},
    },
    config::Config,
    errors::AppResult,
};

/// Bearer-token authorization against the issuer's JWKS.
pub struct AuthGate {
    verifier: TokenVerifier,
    keys: JwksCache,
}

impl AuthGate {
    pub fn new(verifier: TokenVerifier, keys: JwksCache) -> Self {
        Self { verifier, keys }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let source = HttpKeySetSource::new(config.jwks_url(), config.jwks_fetch_timeout())?;
        Ok(Self::with_source(config, Arc::new(source)))
    }

    pub fn with_source(config: &Config, source: Arc<dyn KeySetSource>) -> Self {
        Self::new(
            TokenVerifier::new(&config.api_audience, &config.issuer()),
            JwksCache::new(source, config.jwks_cache_ttl())
                .with_min_refresh_interval(config.jwks_min_refresh_interval()),
        )
    }

    /// Checks `header` carries a valid token granting `permission` and returns its claims.
    pub async fn authorize(
        &self,
        header: Option<&str>,
        permission: &str,
    ) -> Result<Claims, AuthError> {
        let token = extract_bearer_token(header)?;
        let kid = self.verifier.key_id(token)?;
        let jwk = self.keys.find(&kid).await?;
        let claims = self.verifier.verify(token, &jwk)?;
        check_permission(&claims, permission)?;

        log::debug!(
            "Authorized '{}' for {} (token expires {:?})",
            claims.subject(),
            permission,
            claims.expires_at()
        );
        Ok(claims)
    }
}
