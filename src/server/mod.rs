//! Web backend of the guild dashboard.
//!
//! Visitors log in with Discord OAuth2, see the servers they are a member of, and
//! open a management page per server. The backend uses Axum as the web framework,
//! SeaORM for the session store, and Dioxus SSR for HTML pages.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and redirects
//! - **Service Layer** (`service/`) - OAuth2 login flow and Discord API access
//! - **Data Layer** (`data/`) - The `login_data` session store
//! - **Model Layer** (`model/`) - Session states and Discord view-models
//! - **Render Layer** (`render/`) - HTML pages built from view-models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session cookie protocol and session resolution
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, Discord client, OAuth2 client)
//! - **Startup** (`startup`) - Initialization of database and HTTP clients
//! - **Router** (`router`) - Axum route configuration and static files
//! - **Scheduler** (`scheduler/`) - Cron job purging expired logins
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the controller
//! 2. **Middleware** reads the `session_id` cookie and looks up the login record
//! 3. **Controller** redirects or calls into the services
//! 4. **Service** fetches live user and guild data from Discord
//! 5. **Render** turns the result into an HTML page

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod render;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
pub(crate) mod fixture;
