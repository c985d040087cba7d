//! Typed records exchanged with the library API

pub mod book;
pub mod loan;
pub mod member;
pub mod user;

// Re-export commonly used types
pub use book::{Author, Book, BookShort, Category};
pub use loan::Loan;
pub use member::Member;
pub use user::{has_role, is_admin, Profile, User};

use serde::Deserialize;

/// Name parts joined by spaces; `-` when none is set
pub(crate) fn display_name(parts: &[Option<&str>]) -> String {
    let name = parts
        .iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() {
        "-".to_string()
    } else {
        name
    }
}

/// Generic `{"status": ...}` acknowledgement (health check, deletions)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}
