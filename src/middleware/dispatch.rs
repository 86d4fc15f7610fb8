//! Adapts an [`Interactor`] into an actix route handler.
//!
//! Every invocation writes exactly one response. Interactor failures are
//! normalized here; anything that goes wrong before the interactor runs
//! (unreadable body, malformed JSON) is returned as an actix error and left
//! to [`SafetyNet`](crate::middleware::safety_net::SafetyNet).

use std::rc::Rc;

use actix_web::{
    error::ErrorBadRequest, http::StatusCode, web, HttpMessage, HttpRequest, HttpResponse, Route,
};
use serde_json::{Map, Value};

use crate::{
    services::interactor::Interactor,
    utils::{
        errors::{InteractorError, FALLBACK_MESSAGE},
        types::MessageBody,
    },
};

/// Binds `interactor` to `route`, e.g. `handle(web::get(), StatusInteractor::new(..))`.
pub fn handle<I>(route: Route, interactor: I) -> Route
where
    I: Interactor + 'static,
{
    let interactor = Rc::new(interactor);
    route.to(move |req: HttpRequest, body: web::Bytes| {
        let interactor = Rc::clone(&interactor);
        async move { dispatch(interactor.as_ref(), &req, &body).await }
    })
}

pub async fn dispatch<I>(
    interactor: &I,
    req: &HttpRequest,
    body: &[u8],
) -> Result<HttpResponse, actix_web::Error>
where
    I: Interactor,
{
    let raw = aggregate_input(req, body)?;

    match run(interactor, raw).await {
        Ok(res) => Ok(res),
        Err(err) => {
            match &err {
                InteractorError::Known(known) => log::debug!(
                    "{} {}: {} {}",
                    req.method(),
                    req.path(),
                    known.status(),
                    known
                ),
                other => log::warn!("{} {}: interactor failed: {other}", req.method(), req.path()),
            }
            Ok(error_response(&err))
        }
    }
}

async fn run<I: Interactor>(interactor: &I, raw: Value) -> Result<HttpResponse, InteractorError> {
    let input = interactor.validate_input(raw)?;
    let output = interactor.execute(input).await?;
    let body = serde_json::to_value(&output).map_err(|e| InteractorError::Unexpected(e.into()))?;

    Ok(HttpResponse::Ok().json(body))
}

/// Maps a failure onto its status code and JSON body.
pub fn error_response(err: &InteractorError) -> HttpResponse {
    match err {
        InteractorError::Known(known) => {
            let status =
                StatusCode::from_u16(known.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let mut builder = HttpResponse::build(status);

            match known.body().filter(|b| !b.is_null()) {
                Some(body) => builder.json(body),
                None => {
                    let message = match known.message() {
                        "" => FALLBACK_MESSAGE,
                        m => m,
                    };
                    builder.json(MessageBody { message })
                }
            }
        }
        // message passes through unredacted
        InteractorError::Unexpected(e) => {
            let message = e.to_string();
            HttpResponse::InternalServerError().json(MessageBody { message: &message })
        }
        InteractorError::Unknown => {
            HttpResponse::InternalServerError().json(MessageBody { message: FALLBACK_MESSAGE })
        }
    }
}

/// Merges the JSON body, then path parameters, then query parameters into
/// one object. On key collisions the later source wins, so query beats path
/// beats body.
pub fn aggregate_input(req: &HttpRequest, body: &[u8]) -> Result<Value, actix_web::Error> {
    let mut merged = Map::new();

    if is_json(req) && !body.iter().all(u8::is_ascii_whitespace) {
        match serde_json::from_slice::<Value>(body).map_err(ErrorBadRequest)? {
            Value::Object(fields) => merged.extend(fields),
            // elements spread under their index: `["a"]` -> `{ "0": "a" }`
            Value::Array(items) => merged.extend(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), item)),
            ),
            _ => return Err(ErrorBadRequest("JSON body must be an object or an array")),
        }
    }

    for (key, value) in req.match_info().iter() {
        merged.insert(key.to_owned(), Value::String(value.to_owned()));
    }

    let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())?.into_inner();
    merged.extend(collect_query(pairs));

    Ok(Value::Object(merged))
}

/// A key given more than once collects its values into an array.
fn collect_query(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut query = Map::new();

    for (key, value) in pairs {
        match query.get_mut(&key) {
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                query.insert(key, Value::String(value));
            }
        }
    }

    query
}

fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type().to_ascii_lowercase();
    content_type == "application/json" || content_type.ends_with("+json")
}
