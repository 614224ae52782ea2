use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures::future::LocalBoxFuture;

use crate::{
    auth::{
        error::{AuthError, MALFORMED},
        AuthGate, Claims,
    },
    errors::AppError,
};

/// Route middleware requiring a bearer token that grants `permission`.
///
/// Usage: `#[get("/drinks-detail", wrap = "RequiresAuth::new(GET_DRINKS_DETAIL)")]`.
pub struct RequiresAuth {
    permission: &'static str,
}

impl RequiresAuth {
    pub fn new(permission: &'static str) -> Self {
        Self { permission }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequiresAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequiresAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequiresAuthService {
            service: Rc::new(service),
            permission: self.permission,
        }))
    }
}

pub struct RequiresAuthService<S> {
    service: Rc<S>,
    permission: &'static str,
}

impl<S, B> Service<ServiceRequest> for RequiresAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let permission = self.permission;

        Box::pin(async move {
            let Some(gate) = req.app_data::<web::Data<AuthGate>>().cloned() else {
                let err = AppError::InternalError("Auth gate not configured".to_string());
                return Ok(req.into_response(err.error_response()).map_into_right_body());
            };

            let outcome = match authorization_header(&req) {
                Ok(header) => gate.authorize(header.as_deref(), permission).await,
                Err(err) => Err(err),
            };

            match outcome {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    let err = AppError::from(err);
                    Ok(req.into_response(err.error_response()).map_into_right_body())
                }
            }
        })
    }
}

/// A present but non-ASCII header value is malformed, not missing.
fn authorization_header(req: &ServiceRequest) -> Result<Option<String>, AuthError> {
    req.headers()
        .get(AUTHORIZATION)
        .map(|value| {
            value
                .to_str()
                .map(str::to_owned)
                .map_err(|_| AuthError::InvalidHeader(MALFORMED))
        })
        .transpose()
}

/// Claims of the caller, available in handlers behind [`RequiresAuth`].
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| {
                AppError::InternalError("Handler is not behind RequiresAuth".to_string())
            });

        ready(claims.map(AuthenticatedUser))
    }
}
