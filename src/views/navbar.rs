//! Navigation bar

use crate::guard::Route;
use crate::models::User;
use crate::services::auth::AuthService;

pub const TITLE: &str = "Library Management";

/// Header line: title, navigation entries when logged in, user badge
pub fn render(user: Option<&User>, current: Route) -> String {
    let mut parts = vec![TITLE.to_string()];
    match user {
        Some(user) => {
            let entries = Route::NAVIGATION
                .iter()
                .map(|route| {
                    if *route == current {
                        format!("[{}]", route.label())
                    } else {
                        route.label().to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            parts.push(entries);
            parts.push(user.badge());
        }
        None => parts.push(Route::Login.label().to_string()),
    }
    parts.join(" | ")
}

/// Log out and go to the sign-in page
pub fn logout(auth: &AuthService) -> Route {
    if let Err(e) = auth.logout() {
        tracing::warn!("Failed to clear session: {}", e);
    }
    Route::Login
}
