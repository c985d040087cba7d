//! Landing page after sign-in

use std::fmt::Write;

use async_trait::async_trait;

use super::{render_header, View, ViewState};
use crate::guard::Route;
use crate::models::{is_admin, User};

pub struct DashboardView {
    user: Option<User>,
    state: ViewState,
}

impl DashboardView {
    pub fn new(user: Option<User>) -> Self {
        Self {
            user,
            state: ViewState::default(),
        }
    }
}

#[async_trait]
impl View for DashboardView {
    fn route(&self) -> Route {
        Route::Dashboard
    }

    fn state(&self) -> &ViewState {
        &self.state
    }

    async fn mount(&mut self) {
        self.state.loaded();
    }

    fn render(&self) -> String {
        let mut out = render_header("Dashboard", &self.state);
        if let Some(user) = &self.user {
            let _ = writeln!(out, "{}", user.badge());
            let _ = write!(out, "You are connected as {}.", user.login);
        }
        if !is_admin(self.user.as_ref()) {
            let _ = write!(
                out,
                "\nNote: backend does not enforce admin permissions yet (no JWT middleware). \
                 UI is styled for admin workflow."
            );
        }
        out
    }
}
