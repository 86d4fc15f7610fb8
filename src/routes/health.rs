use actix_web::{web, Scope};

use crate::{
    config::settings::Settings,
    middleware::dispatch::handle,
    services::health::status::StatusInteractor,
};

pub fn health_scope(settings: &Settings) -> Scope {
    web::scope("/health")
        .route("/status", handle(web::get(), StatusInteractor::new(settings.clone())))
}
