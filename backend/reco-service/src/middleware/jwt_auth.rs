use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::error::AppError;
use crate::security::{Claims, User};
use crate::state::AppState;

/// JWT Authentication Middleware
///
/// Validates the bearer token against the keys in `AppState` and stores the
/// claims in request extensions for [`CurrentUser`]. Rejected requests are
/// answered here with the `AppError` body and never reach the handler.
pub struct JwtAuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = JwtAuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate(&req) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(err) => {
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

fn authenticate(req: &ServiceRequest) -> Result<Claims, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::Internal("AppState not configured".to_string()))?;

    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            tracing::debug!(path = %req.path(), "Missing or malformed Authorization header");
            AppError::invalid_credentials()
        })?;

    Ok(state.jwt.validate_token(token)?)
}

/// Authenticated, active user of the current request
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl actix_web::FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        ready(resolve_user(req))
    }
}

fn resolve_user(req: &actix_web::HttpRequest) -> Result<CurrentUser, AppError> {
    let username = req
        .extensions()
        .get::<Claims>()
        .map(|claims| claims.sub.clone())
        .ok_or_else(AppError::invalid_credentials)?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::Internal("AppState not configured".to_string()))?;

    let user = state.users.get(&username).cloned().ok_or_else(|| {
        tracing::warn!(%username, "Token subject is not a known user");
        AppError::invalid_credentials()
    })?;

    if !user.is_active() {
        return Err(AppError::InactiveUser);
    }

    Ok(CurrentUser(user))
}
