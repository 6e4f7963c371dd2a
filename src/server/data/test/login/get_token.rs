use super::*;

/// Tests that the stored token is returned for a live session.
///
/// Expected: Ok(Some(token))
#[tokio::test]
async fn returns_stored_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_login_for_session(db, "abc123", "T").await?;

    let repo = LoginRepository::new(db, week_cutoff());
    let token = repo.get_token("abc123").await?;

    assert_eq!(token.unwrap().secret(), "T");

    Ok(())
}

/// Tests that an unknown session ID yields no token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    let repo = LoginRepository::new(db, week_cutoff());
    let token = repo.get_token("missing").await?;

    assert!(token.is_none());

    Ok(())
}

/// Tests that an expired record yields no token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_expired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::login_data::LoginDataFactory::new(db)
        .session_id("old")
        .oauth_token("stale")
        .created_at(Utc::now() - Duration::days(8))
        .build()
        .await?;

    let repo = LoginRepository::new(db, week_cutoff());
    let token = repo.get_token("old").await?;

    assert!(token.is_none());

    Ok(())
}
