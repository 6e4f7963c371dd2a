use super::*;

/// Tests that deleting a session removes its record.
///
/// Expected: Ok with has_session false afterwards
#[tokio::test]
async fn removes_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_login_for_session(db, "abc123", "T").await?;
    let other = factory::create_login(db).await?;

    let repo = LoginRepository::new(db, week_cutoff());
    repo.delete("abc123").await?;

    assert!(!repo.has_session("abc123").await?);
    assert!(repo.has_session(&other.session_id).await?);

    Ok(())
}

/// Tests that deleting twice is not an error.
///
/// Expected: Ok for both calls
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_login_for_session(db, "abc123", "T").await?;

    let repo = LoginRepository::new(db, week_cutoff());
    repo.delete("abc123").await?;
    repo.delete("abc123").await?;
    repo.delete("never-existed").await?;

    assert!(!repo.has_session("abc123").await?);

    Ok(())
}
