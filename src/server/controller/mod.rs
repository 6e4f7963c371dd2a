//! HTTP route handlers.
//!
//! Handlers resolve the request's session with `AuthGuard`, call into the service
//! layer, and either render a page or redirect. Every handler returns
//! `Result<_, AppError>` so faults are mapped to status codes in one place.

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod manage;

#[cfg(test)]
mod test;
