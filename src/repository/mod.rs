//! Repository layer for client-side persisted state

pub mod session;

pub use session::{FileSessionRepository, MemorySessionRepository, SessionRepository, SESSION_KEY};
