//! Page views of the administration front-end
//!
//! Every view follows the same lifecycle: it starts `Idle`, fetches its
//! collections on mount and becomes `Loaded`. A failed action leaves the
//! message in the view's error slot, next to whatever data was already
//! there. Successful mutations re-fetch every collection the view shows.

pub mod books;
pub mod dashboard;
pub mod loans;
pub mod login;
pub mod members;
pub mod navbar;
pub mod table;

use std::fmt::Write;

use async_trait::async_trait;

use crate::error::AppError;
use crate::guard::Route;

pub use books::BooksView;
pub use dashboard::DashboardView;
pub use loans::LoansView;
pub use login::LoginView;
pub use members::MembersView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    Loaded,
}

/// Load status plus the error overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    status: ViewStatus,
    error: Option<String>,
}

impl ViewState {
    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn is_loaded(&self) -> bool {
        self.status == ViewStatus::Loaded
    }

    /// Message of the last failed action
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start of an action: the previous error goes away
    pub fn begin(&mut self) {
        self.error = None;
    }

    pub fn loaded(&mut self) {
        self.status = ViewStatus::Loaded;
    }

    /// Record a failed action. Data loaded earlier stays displayed.
    pub fn fail(&mut self, action: &str, err: &AppError) {
        let message = err.display_message();
        tracing::warn!("{} failed: {}", action, err);
        self.error = Some(message);
    }
}

/// A mountable, renderable page
#[async_trait]
pub trait View: Send {
    fn route(&self) -> Route;

    fn state(&self) -> &ViewState;

    /// Initial fetch, also used by "Refresh"
    async fn mount(&mut self);

    fn render(&self) -> String;
}

/// Page heading followed by the error banner when there is one
pub(crate) fn render_header(title: &str, state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", title);
    if let Some(error) = state.error() {
        let _ = writeln!(out, "! {}", error);
    }
    out
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for view tests

    use std::sync::Arc;

    use crate::api::{ApiClient, MockTransport};
    use crate::repository::MemorySessionRepository;
    use crate::services::Services;

    pub fn services(mock: MockTransport) -> (Services, Arc<MemorySessionRepository>) {
        let sessions = Arc::new(MemorySessionRepository::new());
        let services = Services::new(ApiClient::new(Arc::new(mock)), sessions.clone());
        (services, sessions)
    }
}
