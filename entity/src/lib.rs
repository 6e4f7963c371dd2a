//! SeaORM entity models for the dashboard database.

pub mod prelude;

pub mod login_data;
