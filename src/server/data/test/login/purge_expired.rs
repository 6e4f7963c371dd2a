use super::*;

/// Tests that only records older than the cutoff are purged.
///
/// Expected: Ok(1) with the live record untouched
#[tokio::test]
async fn removes_only_expired_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::login_data::LoginDataFactory::new(db)
        .session_id("old")
        .created_at(Utc::now() - Duration::days(10))
        .build()
        .await?;
    factory::create_login_for_session(db, "fresh", "T").await?;

    let repo = LoginRepository::new(db, week_cutoff());
    let removed = repo.purge_expired().await?;

    assert_eq!(removed, 1);
    assert!(repo.has_session("fresh").await?);

    // The expired row is gone, not just hidden
    let everything = LoginRepository::new(db, Utc::now() - Duration::days(365));
    assert!(!everything.has_session("old").await?);

    Ok(())
}

/// Tests purging an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_login(db).await?;

    let repo = LoginRepository::new(db, week_cutoff());
    assert_eq!(repo.purge_expired().await?, 0);

    Ok(())
}
