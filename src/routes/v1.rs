// src/routes/v1.rs

use actix_web::{web, Scope};

use crate::{config::settings::Settings, routes::health::health_scope};

pub const V1_PREFIX: &str = "/api/v1";

/// Everything served under `/api/v1`.
pub fn v1_scope(settings: &Settings) -> Scope {
    web::scope(V1_PREFIX)
        .service(health_scope(settings))
}
