//! Routes and the guard protecting them

use std::fmt;
use std::sync::Arc;

use crate::models::User;
use crate::repository::SessionRepository;

/// Screens of the administration front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Members,
    Books,
    Loans,
}

impl Route {
    /// Entries shown in the navigation bar, in order
    pub const NAVIGATION: [Route; 4] = [Route::Dashboard, Route::Members, Route::Books, Route::Loans];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Members => "/members",
            Route::Books => "/books",
            Route::Loans => "/loans",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Members => "Members",
            Route::Books => "Books",
            Route::Loans => "Loans",
        }
    }

    /// Resolve a path. Unknown paths fall back to the dashboard.
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/members" => Route::Members,
            "/books" => Route::Books,
            "/loans" => Route::Loans,
            _ => Route::Dashboard,
        }
    }

    /// Whether the route needs a logged-in user
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// Mount the requested view. `user` is `None` only for public routes
    /// visited while logged out.
    Render { route: Route, user: Option<User> },
    /// Go to this route instead
    Redirect(Route),
}

/// Decides, before a view mounts, whether it may render
#[derive(Clone)]
pub struct RouteGuard {
    sessions: Arc<dyn SessionRepository>,
}

impl RouteGuard {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Check access to `route` against the stored session
    pub fn authorize(&self, route: Route) -> Access {
        let user = self.sessions.get();
        if route.is_protected() && user.is_none() {
            tracing::debug!("No session, redirecting {} to {}", route, Route::Login);
            return Access::Redirect(Route::Login);
        }
        Access::Render { route, user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemorySessionRepository;
    use serde_json::json;

    fn admin() -> User {
        serde_json::from_value(json!({ "login": "admin", "profile": { "roleName": "ADMIN" } })).unwrap()
    }

    #[test]
    fn test_protected_routes_redirect_without_session() {
        let guard = RouteGuard::new(Arc::new(MemorySessionRepository::new()));
        for route in Route::NAVIGATION {
            assert_eq!(guard.authorize(route), Access::Redirect(Route::Login));
        }
    }

    #[test]
    fn test_login_route_is_public() {
        let guard = RouteGuard::new(Arc::new(MemorySessionRepository::new()));
        assert_eq!(
            guard.authorize(Route::Login),
            Access::Render { route: Route::Login, user: None }
        );
    }

    #[test]
    fn test_session_grants_access() {
        let sessions = Arc::new(MemorySessionRepository::new());
        sessions.set(&admin()).unwrap();
        let guard = RouteGuard::new(sessions.clone());

        assert_eq!(
            guard.authorize(Route::Books),
            Access::Render { route: Route::Books, user: Some(admin()) }
        );
    }

    #[test]
    fn test_clear_revokes_access() {
        let sessions = Arc::new(MemorySessionRepository::new());
        sessions.set(&admin()).unwrap();
        let guard = RouteGuard::new(sessions.clone());

        sessions.clear().unwrap();
        for route in Route::NAVIGATION {
            assert_eq!(guard.authorize(route), Access::Redirect(Route::Login));
        }
    }

    #[test]
    fn test_corrupted_session_redirects() {
        let guard = RouteGuard::new(Arc::new(MemorySessionRepository::with_raw("}{")));
        assert_eq!(guard.authorize(Route::Loans), Access::Redirect(Route::Login));
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from_path("/members"), Route::Members);
        assert_eq!(Route::from_path("/loans/"), Route::Loans);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/nowhere"), Route::Dashboard);
        for route in Route::NAVIGATION {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
