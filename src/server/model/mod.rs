//! Server-side domain models and view-models.
//!
//! The Discord projections here are built from Serenity API types at the service
//! boundary and handed to the renderer. They are never persisted: every request
//! fetches them live from Discord.

pub mod discord;
pub mod login;
