//! Database repository layer.
//!
//! This module contains the repository structs that handle database operations. Repositories
//! use SeaORM entity models internally and return domain types so the service layer never
//! depends on entity models directly.

pub mod login;

#[cfg(test)]
mod test;
