use crate::server::data::login::LoginRepository;
use chrono::{Duration, Utc};
use oauth2::AccessToken;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_token;
mod has_session;
mod purge_expired;
mod put;

/// Cutoff used by most tests: records from the last 7 days are live.
fn week_cutoff() -> chrono::DateTime<Utc> {
    Utc::now() - Duration::days(7)
}
