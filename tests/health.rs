// tests/health.rs
use actix_web::{middleware::Logger, test, App};
use chrono::{DateTime, Utc};
use serde_json::Value;

use health_service::{
    config::settings::{Environment, Settings},
    middleware::safety_net::SafetyNet,
    routes::v1::v1_scope,
};

#[actix_rt::test]
async fn status_reports_ok_with_environment_uptime_and_timestamp() {
    let settings = Settings::default();
    let app = test::init_service(App::new().wrap(SafetyNet).service(v1_scope(&settings))).await;

    let req = test::TestRequest::get().uri("/api/v1/health/status").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    println!("status body: {body}");

    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "dev");

    let uptime = body["uptime"].as_f64().expect("uptime is a number");
    assert!(uptime >= 0.0);

    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    assert!(timestamp.ends_with('Z'), "not UTC: {timestamp}");
    let parsed = DateTime::parse_from_rfc3339(timestamp).expect("ISO-8601 timestamp");
    let drift = Utc::now().signed_duration_since(parsed.with_timezone(&Utc));
    assert!(drift.num_seconds().abs() < 60);

    assert_eq!(body.as_object().map(|o| o.len()), Some(4));
}

#[actix_rt::test]
async fn status_works_with_the_production_middleware_stack() {
    // same wrapping order as main.rs
    let settings = Settings::default();
    let app = test::init_service(
        App::new()
            .wrap(SafetyNet)
            .wrap(Logger::default())
            .service(v1_scope(&settings)),
    )
    .await;

    for _ in 0..3 {
        let req = test::TestRequest::get().uri("/api/v1/health/status").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }
}

#[actix_rt::test]
async fn status_reflects_configured_environment() {
    let settings = Settings {
        port: 8080,
        environment: Environment::Prod,
    };
    let app = test::init_service(App::new().service(v1_scope(&settings))).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/health/status?verbose=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["environment"], "prod");
}

#[actix_rt::test]
async fn uptime_does_not_go_backwards() {
    let settings = Settings::default();
    let app = test::init_service(App::new().service(v1_scope(&settings))).await;

    let req = test::TestRequest::get().uri("/api/v1/health/status").to_request();
    let first: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/api/v1/health/status").to_request();
    let second: Value = test::call_and_read_body_json(&app, req).await;

    assert!(second["uptime"].as_f64() >= first["uptime"].as_f64());
}

#[actix_rt::test]
async fn unversioned_path_is_not_routed() {
    let settings = Settings::default();
    let app = test::init_service(App::new().wrap(SafetyNet).service(v1_scope(&settings))).await;

    for path in ["/health/status", "/api/health/status", "/api/v2/health/status"] {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404, "{path} should not resolve");
    }
}
