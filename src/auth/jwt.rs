use jsonwebtoken::{decode, decode_header, jwk::Jwk, Algorithm, DecodingKey, Validation};

use crate::auth::{
    claims::Claims,
    error::{AuthError, MALFORMED},
};

/// Verifies RS256 access tokens for one audience and issuer.
#[derive(Clone)]
pub struct TokenVerifier {
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(audience: &str, issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[audience]);
        validation.set_issuer(&[issuer]);

        Self { validation }
    }

    /// Reads the signing key id from the unverified token header.
    pub fn key_id(&self, token: &str) -> Result<String, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidHeader(MALFORMED))?;
        header.kid.ok_or(AuthError::InvalidHeader(MALFORMED))
    }

    pub fn verify(&self, token: &str, jwk: &Jwk) -> Result<Claims, AuthError> {
        let key = DecodingKey::from_jwk(jwk)?;
        let data = decode::<Claims>(token, &key, &self.validation)?;
        Ok(data.claims)
    }
}
