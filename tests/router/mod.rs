//! End to end tests driving the full router.
//!
//! Requests go through the session layer, so the cookie returned by register or login is
//! forwarded to later requests the way a browser would.

mod checkout;
mod docs;
mod expense;

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use luxe::server::{model::app::AppState, router};
use luxe_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::read_json;

fn app(test: &TestSetup) -> Router {
    let state: AppState = test.state();
    let session = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    router::routes().with_state(state).layer(session)
}

/// Sends a request with an optional JSON body and session cookie
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// The `name=value` part of the session cookie set by a response
fn session_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Response did not set a session cookie")
        .to_str()
        .unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

async fn register(app: &Router, name: &str, email: &str) -> String {
    let response = send(
        app,
        Method::POST,
        "/user/register",
        Some(json!({ "name": name, "email": email, "password": "password123" })),
        None,
    )
    .await;

    session_cookie(&response)
}
