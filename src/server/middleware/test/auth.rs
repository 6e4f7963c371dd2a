use axum_extra::extract::cookie::CookieJar;
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    fixture::{jar_with, test_state},
    middleware::auth::AuthGuard,
    model::login::SessionState,
    service::discord::mock::MockDiscord,
};

/// Tests a request without any cookie.
///
/// Expected: Ok(SessionState::Anonymous)
#[tokio::test]
async fn resolves_anonymous_without_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let state = test_state(&test.db, MockDiscord::new());

    let jar = CookieJar::new();
    let session = AuthGuard::new(&state, &jar).resolve().await?;

    assert!(matches!(session, SessionState::Anonymous));

    Ok(())
}

/// Tests a cookie without a login record.
///
/// Expected: Ok(SessionState::Unauthenticated) carrying the cookie value
#[tokio::test]
async fn resolves_unauthenticated_without_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let state = test_state(&test.db, MockDiscord::new());

    let jar = jar_with("session_id=abc123");
    let session = AuthGuard::new(&state, &jar).resolve().await?;

    match session {
        SessionState::Unauthenticated { session_id } => assert_eq!(session_id, "abc123"),
        other => panic!("Expected Unauthenticated, got {:?}", other),
    }

    Ok(())
}

/// Tests a cookie mapped to a login record.
///
/// Expected: Ok(SessionState::Authenticated) with the stored token
#[tokio::test]
async fn resolves_authenticated_with_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;
    let state = test_state(db, MockDiscord::new());

    factory::create_login_for_session(db, "abc123", "T").await?;

    let jar = jar_with("session_id=abc123");
    let session = AuthGuard::new(&state, &jar).resolve().await?;

    match session {
        SessionState::Authenticated { session_id, token } => {
            assert_eq!(session_id, "abc123");
            assert_eq!(token.secret(), "T");
        }
        other => panic!("Expected Authenticated, got {:?}", other),
    }

    Ok(())
}

/// Tests that an expired login record no longer authenticates.
///
/// Expected: Ok(SessionState::Unauthenticated)
#[tokio::test]
async fn expired_record_is_unauthenticated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;
    let state = test_state(db, MockDiscord::new());

    factory::login_data::LoginDataFactory::new(db)
        .session_id("abc123")
        .created_at(Utc::now() - Duration::days(8))
        .build()
        .await?;

    let jar = jar_with("session_id=abc123");
    let session = AuthGuard::new(&state, &jar).resolve().await?;

    assert!(matches!(session, SessionState::Unauthenticated { .. }));

    Ok(())
}

/// Tests that a broken session store surfaces as a database error.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_when_store_unavailable() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let state = test_state(&test.db, MockDiscord::new());

    let jar = jar_with("session_id=abc123");
    let result = AuthGuard::new(&state, &jar).resolve().await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
