//! Page components rendered on the server.

use dioxus::prelude::*;

use crate::server::model::discord::{GuildSummary, UserProfile};

/// Navigation bar shared by every page.
///
/// Anonymous visitors get a login link; a logged-in user gets a link to the
/// dashboard showing their avatar and tag.
#[component]
pub fn NavBar(#[props(!optional)] user: Option<UserProfile>) -> Element {
    rsx! {
        nav { class: "navbar",
            a { class: "navbar-brand", href: "/home", "Dashboard" }
            ul { class: "nav navbar-nav navbar-right",
                li {
                    a { href: "/invite", "Invite" }
                }
                li {
                    if let Some(user) = &user {
                        a {
                            style: "font-family: Rockwell Extra Bold, Rockwell Bold, monospace;",
                            href: "/dashboard",
                            img {
                                class: "img-circle",
                                src: "{user.avatar_url}",
                                style: "height: 30px;width:30px;",
                            }
                            " {user.tag}"
                        }
                    } else {
                        a { class: "glyphicon glyphicon-log-in", href: "/login", "Login" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn HomePage(#[props(!optional)] user: Option<UserProfile>) -> Element {
    let logged_in = user.is_some();

    rsx! {
        NavBar { user: user.clone() }
        main { class: "home",
            h1 { "Manage your servers" }
            p { "Add the bot to your Discord server and configure it from your browser." }
            div { class: "actions",
                a { class: "btn btn-primary", href: "/invite", "Add to Discord" }
                if logged_in {
                    a { class: "btn btn-default", href: "/dashboard", "Open dashboard" }
                } else {
                    a { class: "btn btn-default", href: "/login", "Login with Discord" }
                }
            }
        }
    }
}

/// Avatar and tag of the logged-in user.
#[component]
pub fn UserTag(user: UserProfile) -> Element {
    rsx! {
        div { class: "user-tag", "data-user-id": "{user.discord_id}",
            img {
                class: "img-circle",
                src: "{user.avatar_url}",
                alt: "{user.display_name}",
                style: "height: 64px;width:64px;",
            }
            div { class: "user-names",
                span { class: "display-name", "{user.display_name}" }
                span { class: "tag", "{user.tag}" }
            }
            a { class: "logout", href: "/logout", "Logout" }
        }
    }
}

#[component]
pub fn GuildCard(guild: GuildSummary) -> Element {
    let initials = guild.initials();

    rsx! {
        a { class: "guild-card", href: "/manage/{guild.guild_id}",
            if let Some(icon_url) = &guild.icon_url {
                img { class: "img-circle guild-icon", src: "{icon_url}", alt: "{guild.name}" }
            } else {
                span { class: "img-circle guild-icon guild-initials", "{initials}" }
            }
            span { class: "guild-name", "{guild.name}" }
            if guild.owner {
                span { class: "badge", "Owner" }
            }
        }
    }
}

#[component]
pub fn GuildList(guilds: Vec<GuildSummary>) -> Element {
    rsx! {
        section { class: "guild-list",
            h2 { "Your servers" }
            if guilds.is_empty() {
                p { class: "empty", "You are not a member of any servers yet." }
            }
            for guild in guilds.iter() {
                GuildCard { key: "{guild.guild_id}", guild: guild.clone() }
            }
        }
    }
}

#[component]
pub fn DashboardPage(user: UserProfile, guilds: Vec<GuildSummary>) -> Element {
    rsx! {
        NavBar { user: Some(user.clone()) }
        main { class: "dashboard",
            UserTag { user: user.clone() }
            GuildList { guilds: guilds.clone() }
        }
    }
}

/// Management page for a single guild.
///
/// Members without the Manage Server permission see the guild but no settings.
#[component]
pub fn ManagePage(guild: GuildSummary) -> Element {
    let initials = guild.initials();

    rsx! {
        main { class: "manage", "data-guild-id": "{guild.guild_id}",
            a { class: "back", href: "/dashboard", "Back to your servers" }
            header { class: "guild-header",
                if let Some(icon_url) = &guild.icon_url {
                    img {
                        class: "img-circle guild-icon",
                        src: "{icon_url}",
                        alt: "{guild.name}",
                        style: "height: 96px;width:96px;",
                    }
                } else {
                    span { class: "img-circle guild-icon guild-initials", "{initials}" }
                }
                h1 { "{guild.name}" }
                span { class: "guild-id", "Server ID: {guild.guild_id}" }
            }
            if guild.can_manage {
                section { class: "settings",
                    h2 { "Settings" }
                    p { "Use the bot's slash commands in your server to change its settings." }
                }
            } else {
                p { class: "no-permission",
                    "You need the Manage Server permission to change settings for this server."
                }
            }
        }
    }
}

#[component]
pub fn ErrorPage(status: u16, message: String) -> Element {
    rsx! {
        main { class: "error",
            h1 { "{status}" }
            p { "{message}" }
            a { href: "/home", "Back to the home page" }
        }
    }
}
