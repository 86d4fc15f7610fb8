use std::future::{ready, Ready};

use actix_web::{
    body::EitherBody,
    dev::{self, Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

use crate::utils::types::ApiEnvelope;

/// Last line of defence for failures the dispatch wrapper never saw:
/// extractor errors, malformed bodies, errors returned by plain handlers.
/// Rewrites them into `{ "data": null, "error": { "code", "message" } }`.
pub struct SafetyNet;

impl<S, B> Transform<S, ServiceRequest> for SafetyNet
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SafetyNetMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SafetyNetMiddleware { service }))
    }
}

pub struct SafetyNetMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SafetyNetMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);

        Box::pin(async move {
            // an `Err` here never reached a handler; actix renders it itself
            let res = fut.await?;

            let Some(message) = res.response().error().map(ToString::to_string) else {
                return Ok(res.map_into_left_body());
            };
            let status = res.status();
            let (req, _) = res.into_parts();

            Ok(ServiceResponse::new(req, envelope(status, &message)).map_into_right_body())
        })
    }
}

fn envelope(status: StatusCode, message: &str) -> HttpResponse {
    if status.is_server_error() {
        log::error!("safety net caught {status}: {message}");
    } else {
        log::debug!("safety net caught {status}: {message}");
    }

    HttpResponse::build(status).json(ApiEnvelope::err(status.as_u16(), message))
}
