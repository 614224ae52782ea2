use actix_web::http::StatusCode;
use thiserror::Error;

pub const MISSING_HEADER: &str = "Authorization header is expected.";
pub const WRONG_SCHEME: &str = "Authorization header must start with \"Bearer\".";
pub const TOKEN_NOT_FOUND: &str = "Token not found.";
pub const NOT_BEARER_TOKEN: &str = "Authorization header must be bearer token.";
pub const MALFORMED: &str = "Authorization malformed.";
pub const UNKNOWN_KEY: &str = "Unable to find the appropriate key.";
pub const UNPARSEABLE_TOKEN: &str = "Unable to parse authentication token.";
pub const INCORRECT_CLAIMS: &str = "Incorrect claims. Please, check the audience and issuer.";

/// Coarse failure classes of the authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidHeader,
    TokenExpired,
    InvalidClaims,
    UnauthorizedPermission,
    KeySetUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidHeader(&'static str),

    #[error("Token expired.")]
    TokenExpired,

    #[error("{0}")]
    InvalidClaims(&'static str),

    /// Token verified but carries no `permissions` claim. Reported as 400.
    #[error("Permissions not included in JWT.")]
    MissingPermissions,

    #[error("Permission not found.")]
    UnauthorizedPermission,

    #[error("Unable to fetch signing keys.")]
    KeySetUnavailable(String),
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            AuthError::InvalidHeader(_) => AuthErrorKind::InvalidHeader,
            AuthError::TokenExpired => AuthErrorKind::TokenExpired,
            AuthError::InvalidClaims(_) | AuthError::MissingPermissions => {
                AuthErrorKind::InvalidClaims
            }
            AuthError::UnauthorizedPermission => AuthErrorKind::UnauthorizedPermission,
            AuthError::KeySetUnavailable(_) => AuthErrorKind::KeySetUnavailable,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind() {
            AuthErrorKind::InvalidHeader => "invalid_header",
            AuthErrorKind::TokenExpired => "token_expired",
            AuthErrorKind::InvalidClaims => "invalid_claims",
            AuthErrorKind::UnauthorizedPermission => "unauthorized",
            AuthErrorKind::KeySetUnavailable => "jwks_unavailable",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingPermissions => StatusCode::BAD_REQUEST,
            AuthError::UnauthorizedPermission => StatusCode::FORBIDDEN,
            AuthError::KeySetUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::InvalidHeader(_) | AuthError::TokenExpired | AuthError::InvalidClaims(_) => {
                StatusCode::UNAUTHORIZED
            }
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims(INCORRECT_CLAIMS),
            _ => AuthError::InvalidHeader(UNPARSEABLE_TOKEN),
        }
    }
}
