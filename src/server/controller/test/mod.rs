//! Route tests driving the full router against an in-memory database and a mock
//! Discord API.

use std::path::Path;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
};
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    serenity::{create_test_guild_info, create_test_owned_guild_info, create_test_user},
};
use tower::ServiceExt;

use crate::server::{
    data::login::LoginRepository, fixture::test_state, router::router,
    service::discord::mock::MockDiscord,
};


async fn setup() -> TestContext {
    TestBuilder::new().with_login_tables().build().await.unwrap()
}

/// Database where session `abc123` is logged in with `token`.
async fn setup_logged_in(token: &str) -> TestContext {
    TestBuilder::new()
        .with_login("abc123", token)
        .build()
        .await
        .unwrap()
}

/// Mock where token `T` belongs to user 42 "nat" who is in guilds 100 and 200.
fn nat_discord() -> MockDiscord {
    MockDiscord::new()
        .with_code("good-code", "T")
        .with_user("T", create_test_user(42, "nat"))
        .with_guilds(
            "T",
            vec![
                create_test_guild_info(100, "Alpha", None),
                create_test_owned_guild_info(200, "Beta"),
            ],
        )
}

/// Sends a GET request, optionally with a `Cookie` header.
async fn get(
    db: &DatabaseConnection,
    discord: MockDiscord,
    uri: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let app = router(test_state(db, discord), Path::new("static"));

    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response has no Location header")
        .to_str()
        .unwrap()
}

fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

/// Value of the cookie named `name` set by the response, if any.
fn set_cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    set_cookies(response).into_iter().find_map(|cookie| {
        let pair = cookie.split(';').next()?;
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(response), to);
}

fn assert_consent_redirect(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = location(response);
    assert!(location.starts_with("https://discord.com/oauth2/authorize?"));
    assert!(location.contains("scope=identify+guilds"));
    assert!(location.contains("client_id=979906554188939264"));
}

/// Token stored for `session_id`, if the session is logged in.
async fn stored_token(db: &DatabaseConnection, session_id: &str) -> Option<String> {
    LoginRepository::new(db, Utc::now() - Duration::days(7))
        .get_token(session_id)
        .await
        .unwrap()
        .map(|token| token.secret().to_string())
}
