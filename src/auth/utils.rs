use crate::auth::{
    claims::Claims,
    error::{AuthError, MISSING_HEADER, NOT_BEARER_TOKEN, TOKEN_NOT_FOUND, WRONG_SCHEME},
};

pub mod permissions {
    pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
    pub const POST_DRINKS: &str = "post:drinks";
    pub const PATCH_DRINKS: &str = "patch:drinks";
    pub const DELETE_DRINKS: &str = "delete:drinks";
}

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::InvalidHeader(MISSING_HEADER))?;
    let parts: Vec<&str> = header.split(' ').collect();

    if !parts[0].eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidHeader(WRONG_SCHEME));
    }

    match parts.as_slice() {
        [_] => Err(AuthError::InvalidHeader(TOKEN_NOT_FOUND)),
        [_, token] if !token.is_empty() => Ok(*token),
        [_, _] => Err(AuthError::InvalidHeader(TOKEN_NOT_FOUND)),
        _ => Err(AuthError::InvalidHeader(NOT_BEARER_TOKEN)),
    }
}

pub fn check_permission(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::MissingPermissions)?;

    if !granted.iter().any(|p| p == permission) {
        return Err(AuthError::UnauthorizedPermission);
    }
    Ok(())
}
