//! HTML page rendering.
//!
//! Pages are dioxus components fed with typed view-models and rendered to strings with
//! `dioxus-ssr`. All interpolated text and attribute values are HTML-escaped by the
//! renderer. Every function here is pure: the same input always yields the same markup.

mod components;

use axum::http::StatusCode;
use dioxus::prelude::*;

use crate::server::model::discord::{GuildSummary, UserProfile};
use components::{
    DashboardPage, ErrorPage, GuildList, HomePage, ManagePage, NavBar, UserTag,
};

/// Wraps a rendered body in the site's HTML document.
fn document(title: &str, body: String) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title>\
         <link rel=\"icon\" href=\"/favicon.ico\">\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\
         </head><body>{body}</body></html>"
    )
}

/// Renders the landing page.
///
/// With a user, the navigation's login link becomes a dashboard link showing the
/// user's avatar and tag; without one the page is the anonymous landing page.
pub fn render_home(user: Option<&UserProfile>) -> String {
    let user = user.cloned();

    document("Home", dioxus_ssr::render_element(rsx! { HomePage { user: user } }))
}

/// Renders the avatar and tag fragment of a user.
pub fn render_user_tag(user: &UserProfile) -> String {
    let user = user.clone();

    dioxus_ssr::render_element(rsx! { UserTag { user: user } })
}

/// Renders the list of guild cards, each linking to its management page.
pub fn render_guild_list(guilds: &[GuildSummary]) -> String {
    let guilds = guilds.to_vec();

    dioxus_ssr::render_element(rsx! { GuildList { guilds: guilds } })
}

/// Renders the dashboard: the user's tag followed by their guild list.
pub fn render_dashboard(user: &UserProfile, guilds: &[GuildSummary]) -> String {
    let user = user.clone();
    let guilds = guilds.to_vec();

    document(
        "Dashboard",
        dioxus_ssr::render_element(rsx! { DashboardPage { user: user, guilds: guilds } }),
    )
}

/// Renders the management page of a single guild for the logged-in user.
pub fn render_manage_page(user: &UserProfile, guild: &GuildSummary) -> String {
    let user = Some(user.clone());
    let guild = guild.clone();

    document(
        "Manage server",
        dioxus_ssr::render_element(rsx! {
            NavBar { user: user }
            ManagePage { guild: guild }
        }),
    )
}

/// Renders the generic error page shown for any failed request.
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let message = message.to_string();

    document(
        status.canonical_reason().unwrap_or("Error"),
        dioxus_ssr::render_element(rsx! {
            NavBar { user: None }
            ErrorPage { status: code, message: message }
        }),
    )
}
