// src/services/health/status.rs

use std::time::Instant;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::settings::{Environment, Settings},
    services::interactor::Interactor,
    utils::errors::{InteractorError, ValidationError},
};

/// Captured on first use; `main` forces it before binding the server.
pub static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Seconds since [`PROCESS_START`].
pub fn uptime_secs() -> f64 {
    PROCESS_START.elapsed().as_secs_f64()
}

#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub status: &'static str,
    pub environment: Environment,
    pub uptime: f64,
    /// ISO-8601 in UTC, millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
    pub timestamp: String,
}

pub struct StatusInteractor {
    settings: Settings,
}

impl StatusInteractor {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

#[async_trait(?Send)]
impl Interactor for StatusInteractor {
    type Input = ();
    type Output = StatusOutput;

    // accepts anything
    fn validate_input(&self, _raw: Value) -> Result<Self::Input, ValidationError> {
        Ok(())
    }

    async fn execute(&self, _input: ()) -> Result<StatusOutput, InteractorError> {
        Ok(StatusOutput {
            status: "ok",
            environment: self.settings.environment,
            uptime: uptime_secs(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}
