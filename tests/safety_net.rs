// tests/safety_net.rs
use actix_web::{error, test, web, App, HttpResponse};
use serde_json::{json, Value};

use health_service::middleware::safety_net::SafetyNet;

#[actix_rt::test]
async fn handler_errors_become_the_envelope() {
    let app = test::init_service(
        App::new().wrap(SafetyNet).route(
            "/taken",
            web::get().to(|| async { Err::<HttpResponse, _>(error::ErrorConflict("name taken")) }),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/taken").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "data": null, "error": { "code": "409", "message": "name taken" } })
    );
}

#[actix_rt::test]
async fn extractor_errors_become_the_envelope() {
    let app = test::init_service(
        App::new().wrap(SafetyNet).route(
            "/items/{id}",
            web::get().to(|id: web::Path<u32>| async move { HttpResponse::Ok().json(*id) }),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/items/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["error"]["code"], "404");
}

#[actix_rt::test]
async fn internal_errors_keep_their_message() {
    let app = test::init_service(App::new().wrap(SafetyNet).route(
        "/explode",
        web::get().to(|| async {
            Err::<HttpResponse, _>(error::ErrorInternalServerError("disk on fire"))
        }),
    ))
    .await;

    let req = test::TestRequest::get().uri("/explode").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!({ "code": "500", "message": "disk on fire" }));
}

#[actix_rt::test]
async fn successful_responses_pass_untouched() {
    let app = test::init_service(
        App::new()
            .wrap(SafetyNet)
            .route("/ok", web::get().to(|| async { HttpResponse::Ok().body("fine") })),
    )
    .await;

    let req = test::TestRequest::get().uri("/ok").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(test::read_body(resp).await, "fine");

    // unmatched routes carry no error and keep actix's default 404
    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    assert!(test::read_body(resp).await.is_empty());
}
