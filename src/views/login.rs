//! Sign-in page

use std::fmt::Write;

use async_trait::async_trait;

use super::{render_header, View, ViewState};
use crate::guard::Route;
use crate::services::auth::AuthService;

/// Credentials typed in the sign-in form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub login: String,
    pub password: String,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            login: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

pub struct LoginView {
    auth: AuthService,
    pub form: LoginForm,
    state: ViewState,
}

impl LoginView {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            form: LoginForm::default(),
            state: ViewState::default(),
        }
    }

    /// Sign in with the form's credentials.
    /// Returns where to navigate next; `None` keeps the user on this page.
    pub async fn submit(&mut self) -> Option<Route> {
        self.state.begin();
        match self.auth.login(&self.form.login, &self.form.password).await {
            Ok(_) => Some(Route::Dashboard),
            Err(e) => {
                self.state.fail("Login", &e);
                None
            }
        }
    }
}

#[async_trait]
impl View for LoginView {
    fn route(&self) -> Route {
        Route::Login
    }

    fn state(&self) -> &ViewState {
        &self.state
    }

    async fn mount(&mut self) {
        self.state.loaded();
    }

    fn render(&self) -> String {
        let mut out = render_header("Sign in", &self.state);
        let _ = writeln!(out, "Use your admin credentials to manage books and loans.");
        let _ = write!(out, "Login: {}", self.form.login);
        out
    }
}
