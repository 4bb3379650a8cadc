//! Server-rendered HTML pages.
//!
//! Every page is a complete document built around [`layout`]; any text that
//! came from a user or the database goes through [`escape`].

pub mod auth;
pub mod pickups;
pub mod site;

use crate::auth::repo::User;

const NAV_LINK: &str = "text-gray-700 hover:text-black font-medium";
pub(crate) const INPUT: &str =
    "mt-1 block w-full rounded-lg border-gray-300 focus:border-emerald-500 focus:ring-emerald-500";
pub(crate) const BUTTON: &str = "inline-flex items-center justify-center bg-emerald-600 hover:bg-emerald-700 text-white font-semibold px-4 py-2 rounded-lg";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(user: Option<&User>) -> String {
    let session_links = match user {
        Some(u) => format!(
            r#"<a id="navMyPickups" href="/my-pickups" class="{NAV_LINK}">My Pickups</a>
                <span class="text-gray-500">{}</span>
                <a id="navLogout" href="/logout" class="{NAV_LINK}">Logout</a>"#,
            escape(&u.email)
        ),
        None => format!(
            r#"<a id="navLogin" href="/login" class="{NAV_LINK}">Login</a>
                <a id="navRegister" href="/register" class="{NAV_LINK}">Register</a>"#
        ),
    };
    format!(
        r#"<nav class="bg-white border-b border-gray-200">
        <div class="max-w-6xl mx-auto px-4 py-3 flex items-center justify-between">
            <div class="text-xl font-bold">E-Waste</div>
            <div class="space-x-6">
                <a id="navHome" href="/" class="{NAV_LINK}">Home</a>
                <a id="navCenters" href="/centers" class="{NAV_LINK}">Centers</a>
                <a id="navSchedule" href="/schedule" class="{NAV_LINK}">Schedule Pickup</a>
                <a id="navAdmin" href="/requests" class="{NAV_LINK}">Admin</a>
                {session_links}
            </div>
        </div>
    </nav>"#
    )
}

/// Wraps `body` in the shared document shell. `title` is escaped here.
pub fn layout(title: &str, user: Option<&User>, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50 text-gray-800">
    {nav}
    {body}
</body>
</html>
"#,
        title = escape(title),
        nav = nav(user),
    )
}
