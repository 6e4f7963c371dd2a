use super::*;

/// Tests that a stored token can be read back unchanged.
///
/// Expected: Ok with the exact token returned by get_token
#[tokio::test]
async fn stores_new_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    let repo = LoginRepository::new(db, week_cutoff());
    repo.put("abc123", &AccessToken::new("T".to_string()))
        .await?;

    assert!(repo.has_session("abc123").await?);
    assert_eq!(repo.get_token("abc123").await?.unwrap().secret(), "T");

    Ok(())
}

/// Tests that storing a token for an existing session replaces the old one.
///
/// Verifies the upsert keeps a single record per session ID.
///
/// Expected: Ok with the new token and one row in the table
#[tokio::test]
async fn replaces_existing_token() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::create_login_for_session(db, "abc123", "old-token").await?;

    let repo = LoginRepository::new(db, week_cutoff());
    repo.put("abc123", &AccessToken::new("new-token".to_string()))
        .await?;

    assert_eq!(repo.get_token("abc123").await?.unwrap().secret(), "new-token");
    let count = entity::prelude::LoginData::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that storing a token revives an expired session.
///
/// The upsert resets `created_at`, so the session is live again.
///
/// Expected: Ok(true) from has_session after put
#[tokio::test]
async fn refreshes_expired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_login_tables().build().await.unwrap();
    let db = &test.db;

    factory::login_data::LoginDataFactory::new(db)
        .session_id("abc123")
        .created_at(Utc::now() - Duration::days(30))
        .build()
        .await?;

    let repo = LoginRepository::new(db, week_cutoff());
    assert!(!repo.has_session("abc123").await?);

    repo.put("abc123", &AccessToken::new("T".to_string()))
        .await?;

    assert!(repo.has_session("abc123").await?);

    Ok(())
}
