//! Authentication service: login, logout and the current session

use std::sync::Arc;

use crate::{
    api::ApiClient,
    error::AppResult,
    models::user::{LoginRequest, LoginResponse, User},
    repository::SessionRepository,
};

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    sessions: Arc<dyn SessionRepository>,
}

impl AuthService {
    pub fn new(api: ApiClient, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { api, sessions }
    }

    /// Check credentials against the API and store the returned user as the
    /// current session
    pub async fn login(&self, login: &str, password: &str) -> AppResult<User> {
        let request = LoginRequest {
            login: login.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.api.post("/api/users/login", &request).await?;
        self.sessions.set(&response.user)?;

        tracing::info!("Logged in as {}", response.user.login);
        Ok(response.user)
    }

    /// Forget the current session
    pub fn logout(&self) -> AppResult<()> {
        if let Some(user) = self.sessions.get() {
            tracing::info!("Logging out {}", user.login);
        }
        self.sessions.clear()
    }

    /// Currently logged-in user
    pub fn current_user(&self) -> Option<User> {
        self.sessions.get()
    }
}
