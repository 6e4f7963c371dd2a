use super::*;

/// Tests that a stored login is reported as an existing session.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_stored_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_login_for_session(db, "abc123", "T").await?;

    let repo = LoginRepository::new(db, week_cutoff());
    assert!(repo.has_session("abc123").await?);

    Ok(())
}

/// Tests that an unknown session ID has no session.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_login(db).await?;

    let repo = LoginRepository::new(db, week_cutoff());
    assert!(!repo.has_session("not-a-session").await?);

    Ok(())
}

/// Tests that a record older than the cutoff is treated as absent.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_expired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::login_data::LoginDataFactory::new(db)
        .session_id("old")
        .created_at(Utc::now() - Duration::days(30))
        .build()
        .await?;

    let repo = LoginRepository::new(db, week_cutoff());
    assert!(!repo.has_session("old").await?);

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = &test.db;

    let repo = LoginRepository::new(db, week_cutoff());
    let result = repo.has_session("abc123").await;

    assert!(result.is_err());

    Ok(())
}
