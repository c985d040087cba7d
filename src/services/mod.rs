//! Typed access to the library API, one service per resource family

pub mod auth;
pub mod catalog;
pub mod health;
pub mod loans;
pub mod users;

use std::sync::Arc;

use crate::{api::ApiClient, repository::SessionRepository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
    pub health: health::HealthService,
}

impl Services {
    /// Create all services sharing one API client and session store
    pub fn new(api: ApiClient, sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            auth: auth::AuthService::new(api.clone(), sessions),
            users: users::UsersService::new(api.clone()),
            catalog: catalog::CatalogService::new(api.clone()),
            loans: loans::LoansService::new(api.clone()),
            health: health::HealthService::new(api),
        }
    }
}
